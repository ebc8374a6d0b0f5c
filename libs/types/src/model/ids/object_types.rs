//! ObjectType identifiers

use crate::model::registry::NodeCategory;

crate::define_node_ids! {
    /// ObjectTypes defined by the FDI5 model
    ObjectTypeId(NodeCategory::ObjectType) {
        /// Device-specific user interface component delivered with an FDI package
        UIPlugInType = 1001 => "UIPlugInType",
        /// Entry point for invoking, answering and aborting actions
        ActionServiceType = 1002 => "ActionServiceType",
        ActionType = 1003 => "ActionType",
        /// Raw communication channel to a device, bypassing the device model
        DirectDeviceAccessType = 1004 => "DirectDeviceAccessType",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_values() {
        assert_eq!(ObjectTypeId::UIPlugInType as u32, 1001);
        assert_eq!(ObjectTypeId::DirectDeviceAccessType.value(), 1004);
        assert_eq!(ObjectTypeId::ALL.len(), 4);
    }

    #[test]
    fn test_try_from_primitive() {
        assert_eq!(ObjectTypeId::try_from(1002u32).unwrap(), ObjectTypeId::ActionServiceType);
        assert!(ObjectTypeId::try_from(1005u32).is_err());
        assert!(ObjectTypeId::from_value(2001).is_err());
    }
}
