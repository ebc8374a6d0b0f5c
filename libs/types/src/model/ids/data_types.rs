//! DataType identifiers
//!
//! `WindowModeType` and `StyleType` are enumerations; `RegistrationParameters`
//! and `ApplyResult` are structures with Default Binary, Default XML and
//! Default JSON encodings (see [`ObjectId`](super::objects::ObjectId)).

use crate::model::registry::NodeCategory;

crate::define_node_ids! {
    /// DataTypes defined by the FDI5 model
    DataTypeId(NodeCategory::DataType) {
        WindowModeType = 3001 => "WindowModeType",
        StyleType = 3002 => "StyleType",
        /// Input of `RegisterNodes`: the nodes an edit context should track
        RegistrationParameters = 3003 => "RegistrationParameters",
        /// Output of `Apply`: per-node status of the committed edit context
        ApplyResult = 3004 => "ApplyResult",
    }
}

impl DataTypeId {
    /// Whether the DataType is a structure with encoding objects
    pub fn is_structure(self) -> bool {
        matches!(self, Self::RegistrationParameters | Self::ApplyResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_values() {
        assert_eq!(DataTypeId::WindowModeType as u32, 3001);
        assert_eq!(DataTypeId::StyleType as u32, 3002);
        assert_eq!(DataTypeId::RegistrationParameters as u32, 3003);
        assert_eq!(DataTypeId::ApplyResult as u32, 3004);
    }

    #[test]
    fn test_structures() {
        assert!(DataTypeId::ApplyResult.is_structure());
        assert!(!DataTypeId::StyleType.is_structure());
    }

    #[test]
    fn test_parse_by_name() {
        assert_eq!("ApplyResult".parse::<DataTypeId>().unwrap(), DataTypeId::ApplyResult);
        assert!("applyresult".parse::<DataTypeId>().is_err());
    }
}
