//! Object identifiers
//!
//! Besides the namespace metadata object, every Object in the model is a
//! DataType encoding node. An encoder picks the node matching the wire
//! representation it writes, see [`ObjectId::encoding_of`].

use super::data_types::DataTypeId;
use crate::model::registry::NodeCategory;

crate::define_node_ids! {
    /// Objects defined by the FDI5 model
    ObjectId(NodeCategory::Object) {
        RegistrationParameters_Encoding_DefaultBinary = 5001 => "Default Binary",
        ApplyResult_Encoding_DefaultBinary = 5002 => "Default Binary",
        RegistrationParameters_Encoding_DefaultXml = 5003 => "Default XML",
        ApplyResult_Encoding_DefaultXml = 5004 => "Default XML",
        RegistrationParameters_Encoding_DefaultJson = 5005 => "Default JSON",
        ApplyResult_Encoding_DefaultJson = 5006 => "Default JSON",
        /// NamespaceMetadata object; its BrowseName is the model URI
        OpcUaFdi5NamespaceMetadata = 15001 => "http://fdi-cooperation.com/OPCUA/FDI5/",
    }
}

/// Wire representation selected by an encoding object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    DefaultBinary,
    DefaultXml,
    DefaultJson,
}

impl Encoding {
    pub const ALL: [Encoding; 3] = [Self::DefaultBinary, Self::DefaultXml, Self::DefaultJson];
}

impl ObjectId {
    /// Encoding object of a structured DataType
    ///
    /// Returns `None` for enumerations, which are encoded as Int32 and have
    /// no encoding objects of their own.
    pub fn encoding_of(data_type: DataTypeId, encoding: Encoding) -> Option<ObjectId> {
        use Encoding::*;

        match (data_type, encoding) {
            (DataTypeId::RegistrationParameters, DefaultBinary) => {
                Some(Self::RegistrationParameters_Encoding_DefaultBinary)
            }
            (DataTypeId::RegistrationParameters, DefaultXml) => {
                Some(Self::RegistrationParameters_Encoding_DefaultXml)
            }
            (DataTypeId::RegistrationParameters, DefaultJson) => {
                Some(Self::RegistrationParameters_Encoding_DefaultJson)
            }
            (DataTypeId::ApplyResult, DefaultBinary) => Some(Self::ApplyResult_Encoding_DefaultBinary),
            (DataTypeId::ApplyResult, DefaultXml) => Some(Self::ApplyResult_Encoding_DefaultXml),
            (DataTypeId::ApplyResult, DefaultJson) => Some(Self::ApplyResult_Encoding_DefaultJson),
            (DataTypeId::WindowModeType | DataTypeId::StyleType, _) => None,
        }
    }

    /// DataType and encoding an encoding object stands for
    pub fn encoded_type(self) -> Option<(DataTypeId, Encoding)> {
        DataTypeId::ALL.iter().find_map(|data_type| {
            Encoding::ALL.iter().find_map(|encoding| {
                (Self::encoding_of(*data_type, *encoding) == Some(self)).then_some((*data_type, *encoding))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_lookup() {
        assert_eq!(
            ObjectId::encoding_of(DataTypeId::ApplyResult, Encoding::DefaultBinary),
            Some(ObjectId::ApplyResult_Encoding_DefaultBinary)
        );
        assert_eq!(
            ObjectId::encoding_of(DataTypeId::RegistrationParameters, Encoding::DefaultJson)
                .map(ObjectId::value),
            Some(5005)
        );
        assert_eq!(ObjectId::encoding_of(DataTypeId::StyleType, Encoding::DefaultXml), None);
    }

    #[test]
    fn test_every_structure_has_all_encodings() {
        for data_type in DataTypeId::ALL.iter().filter(|t| t.is_structure()) {
            for encoding in Encoding::ALL {
                let object = ObjectId::encoding_of(*data_type, encoding)
                    .unwrap_or_else(|| panic!("{} has no {:?} encoding", data_type, encoding));
                assert_eq!(object.encoded_type(), Some((*data_type, encoding)));
            }
        }
    }

    #[test]
    fn test_metadata_object() {
        let metadata = ObjectId::OpcUaFdi5NamespaceMetadata;
        assert_eq!(metadata.value(), 15001);
        assert_eq!(metadata.browse_name(), "http://fdi-cooperation.com/OPCUA/FDI5/");
        assert_eq!(metadata.encoded_type(), None);
    }
}
