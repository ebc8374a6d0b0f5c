//! Variable identifiers

use crate::model::registry::NodeCategory;

crate::define_node_ids! {
    /// Variables defined by the FDI5 model
    VariableId(NodeCategory::Variable) {
        UIPlugInType_UIPVariantVersion = 6001 => "UIPVariantVersion",
        UIPlugInType_FDITechnologyVersion = 6002 => "FDITechnologyVersion",
        UIPlugInType_RuntimeId = 6003 => "RuntimeId",
        UIPlugInType_PlatformId = 6004 => "PlatformId",
        UIPlugInType_Style = 6005 => "Style",
        UIPlugInType_StartElementName = 6006 => "StartElementName",
        WindowModeType_EnumStrings = 6007 => "EnumStrings",
        StyleType_EnumStrings = 6008 => "EnumStrings",
        ActionServiceType_InvokeAction_InputArguments = 6009 => "InputArguments",
        ActionServiceType_InvokeAction_OutputArguments = 6010 => "OutputArguments",
        ActionServiceType_RespondAction_InputArguments = 6011 => "InputArguments",
        ActionServiceType_RespondAction_OutputArguments = 6012 => "OutputArguments",
        ActionServiceType_AbortAction_InputArguments = 6013 => "InputArguments",
        ActionServiceType_AbortAction_OutputArguments = 6014 => "OutputArguments",
        DirectDeviceAccessType_InitDirectAccess_InputArguments = 6015 => "InputArguments",
        DirectDeviceAccessType_InitDirectAccess_OutputArguments = 6016 => "OutputArguments",
        DirectDeviceAccessType_EndDirectAccess_OutputArguments = 6017 => "OutputArguments",
        DirectDeviceAccessType_Transfer_InputArguments = 6018 => "InputArguments",
        DirectDeviceAccessType_Transfer_OutputArguments = 6019 => "OutputArguments",
        GetEditContext_InputArguments = 6020 => "InputArguments",
        GetEditContext_OutputArguments = 6021 => "OutputArguments",
        RegisterNodes_InputArguments = 6022 => "InputArguments",
        RegisterNodes_OutputArguments = 6023 => "OutputArguments",
        Apply_InputArguments = 6024 => "InputArguments",
        Apply_OutputArguments = 6025 => "OutputArguments",
        Reset_InputArguments = 6026 => "InputArguments",
        Reset_OutputArguments = 6027 => "OutputArguments",
        // Binary type dictionary
        OpcUaFdi5_BinarySchema = 6028 => "Opc.Ua.Fdi5",
        OpcUaFdi5_BinarySchema_NamespaceUri = 6029 => "NamespaceUri",
        OpcUaFdi5_BinarySchema_Deprecated = 6030 => "Deprecated",
        OpcUaFdi5_BinarySchema_RegistrationParameters = 6031 => "RegistrationParameters",
        OpcUaFdi5_BinarySchema_ApplyResult = 6032 => "ApplyResult",
        // XML schema
        OpcUaFdi5_XmlSchema = 6033 => "Opc.Ua.Fdi5",
        OpcUaFdi5_XmlSchema_NamespaceUri = 6034 => "NamespaceUri",
        OpcUaFdi5_XmlSchema_Deprecated = 6035 => "Deprecated",
        OpcUaFdi5_XmlSchema_RegistrationParameters = 6036 => "RegistrationParameters",
        OpcUaFdi5_XmlSchema_ApplyResult = 6037 => "ApplyResult",
        // NamespaceMetadata properties
        OpcUaFdi5NamespaceMetadata_NamespaceUri = 15002 => "NamespaceUri",
        OpcUaFdi5NamespaceMetadata_NamespaceVersion = 15003 => "NamespaceVersion",
        OpcUaFdi5NamespaceMetadata_NamespacePublicationDate = 15004 => "NamespacePublicationDate",
        OpcUaFdi5NamespaceMetadata_IsNamespaceSubset = 15005 => "IsNamespaceSubset",
        OpcUaFdi5NamespaceMetadata_StaticNodeIdTypes = 15006 => "StaticNodeIdTypes",
        OpcUaFdi5NamespaceMetadata_StaticNumericNodeIdRange = 15007 => "StaticNumericNodeIdRange",
        OpcUaFdi5NamespaceMetadata_StaticStringNodeIdPattern = 15008 => "StaticStringNodeIdPattern",
    }
}

impl VariableId {
    /// Direct child variables of a parent node, matched on the symbol path
    pub fn children_of(parent: &str) -> Vec<VariableId> {
        let prefix = format!("{}_", parent);
        Self::ALL
            .iter()
            .copied()
            .filter(|id| {
                id.name()
                    .strip_prefix(&prefix)
                    .is_some_and(|rest| !rest.contains('_'))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_properties() {
        let children = VariableId::children_of("UIPlugInType");
        assert_eq!(children.len(), 6);
        assert_eq!(children[0], VariableId::UIPlugInType_UIPVariantVersion);
        assert_eq!(children[5].browse_name(), "StartElementName");
    }

    #[test]
    fn test_children_skip_grandchildren() {
        let children = VariableId::children_of("OpcUaFdi5_BinarySchema");
        assert_eq!(children.len(), 4);
        assert!(children.contains(&VariableId::OpcUaFdi5_BinarySchema_ApplyResult));

        // argument properties hang off the methods, not the type
        assert!(VariableId::children_of("ActionServiceType").is_empty());
        assert_eq!(VariableId::children_of("ActionServiceType_InvokeAction").len(), 2);
    }

    #[test]
    fn test_metadata_properties() {
        let children = VariableId::children_of("OpcUaFdi5NamespaceMetadata");
        assert_eq!(children.len(), 7);
        assert_eq!(
            VariableId::OpcUaFdi5NamespaceMetadata_NamespaceUri.value(),
            15002
        );
    }
}
