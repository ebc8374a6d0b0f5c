//! Namespace URIs used by the FDI5 information model
//!
//! The model owns `OPC_UA_FDI5`. Its structured DataTypes are described in the
//! `OPC_UA_FDI5_XSD` schema namespace, and it layers on top of the Device
//! Integration model and the base OPC UA model.

/// Namespace owning every node identifier in this crate
pub const OPC_UA_FDI5: &str = "http://fdi-cooperation.com/OPCUA/FDI5/";

/// XML schema namespace of the FDI5 structured DataTypes
pub const OPC_UA_FDI5_XSD: &str = "http://fdi-cooperation.com/OPCUA/FDI5/Types.xsd";

/// OPC UA for Devices (DI) companion model
pub const OPC_UA_DI: &str = "http://opcfoundation.org/UA/DI/";

/// Base OPC UA model, always namespace index 0
pub const OPC_UA: &str = "http://opcfoundation.org/UA/";

/// Namespace of the qualified identifier tables
pub const MODEL_NAMESPACE: &str = OPC_UA_FDI5;

/// Symbol → URI table of every namespace the model defines or depends on
pub const NAMESPACES: [(&str, &str); 4] = [
    ("OPC_UA_FDI5", OPC_UA_FDI5),
    ("OPC_UA_FDI5_XSD", OPC_UA_FDI5_XSD),
    ("OPC_UA_DI", OPC_UA_DI),
    ("OPC_UA", OPC_UA),
];

/// Look up a namespace URI by its symbol, the name of the matching constant
pub fn namespace_uri(symbol: &str) -> Option<&'static str> {
    NAMESPACES
        .iter()
        .find(|(name, _)| *name == symbol)
        .map(|(_, uri)| *uri)
}

/// Check whether a URI is one of the four model namespaces
pub fn is_known_namespace(uri: &str) -> bool {
    NAMESPACES.iter().any(|(_, known)| *known == uri)
}
