//! BrowseNames defined by the FDI5 model
//!
//! These strings are the human-facing contract of the model and stay stable
//! across model versions. Names inherited from the base model
//! (`InputArguments`, `EnumStrings`, `Default Binary`, ...) are not repeated here.

macro_rules! browse_names {
    ($($constant:ident = $value:literal),+ $(,)?) => {
        $(pub const $constant: &str = $value;)+

        /// Constant name → BrowseName table
        pub const ALL: &[(&str, &str)] = &[$((stringify!($constant), $value),)+];
    };
}

browse_names! {
    ABORT_ACTION = "AbortAction",
    ACTION_SERVICE_TYPE = "ActionServiceType",
    ACTION_TYPE = "ActionType",
    APPLY = "Apply",
    APPLY_RESULT = "ApplyResult",
    DIRECT_DEVICE_ACCESS_TYPE = "DirectDeviceAccessType",
    END_DIRECT_ACCESS = "EndDirectAccess",
    FDI_TECHNOLOGY_VERSION = "FDITechnologyVersion",
    GET_EDIT_CONTEXT = "GetEditContext",
    INIT_DIRECT_ACCESS = "InitDirectAccess",
    INVOKE_ACTION = "InvokeAction",
    OPC_UA_FDI5_BINARY_SCHEMA = "Opc.Ua.Fdi5",
    OPC_UA_FDI5_NAMESPACE_METADATA = "http://fdi-cooperation.com/OPCUA/FDI5/",
    OPC_UA_FDI5_XML_SCHEMA = "Opc.Ua.Fdi5",
    PLATFORM_ID = "PlatformId",
    REGISTER_NODES = "RegisterNodes",
    REGISTRATION_PARAMETERS = "RegistrationParameters",
    RESET = "Reset",
    RESPOND_ACTION = "RespondAction",
    RUNTIME_ID = "RuntimeId",
    START_ELEMENT_NAME = "StartElementName",
    STYLE = "Style",
    STYLE_TYPE = "StyleType",
    TRANSFER = "Transfer",
    UI_DESCRIPTION_TYPE = "UIDescriptionType",
    UIP_VARIANT_VERSION = "UIPVariantVersion",
    UI_PLUG_IN_TYPE = "UIPlugInType",
    WINDOW_MODE_TYPE = "WindowModeType",
}

/// BrowseName for a constant name such as `"APPLY_RESULT"`
pub fn lookup(constant: &str) -> Option<&'static str> {
    ALL.iter()
        .find(|(name, _)| *name == constant)
        .map(|(_, value)| *value)
}

/// Whether a string is one of the BrowseNames the model defines
pub fn is_model_browse_name(value: &str) -> bool {
    ALL.iter().any(|(_, known)| *known == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_literals() {
        assert_eq!(INVOKE_ACTION, "InvokeAction");
        assert_eq!(APPLY_RESULT, "ApplyResult");
        assert_eq!(
            OPC_UA_FDI5_NAMESPACE_METADATA,
            "http://fdi-cooperation.com/OPCUA/FDI5/"
        );
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("GET_EDIT_CONTEXT"), Some("GetEditContext"));
        assert_eq!(lookup("GetEditContext"), None);
        assert!(is_model_browse_name("UIPlugInType"));
        assert!(!is_model_browse_name("InputArguments"));
    }

    #[test]
    fn test_no_empty_names() {
        assert!(ALL.iter().all(|(_, value)| !value.is_empty()));
    }
}
