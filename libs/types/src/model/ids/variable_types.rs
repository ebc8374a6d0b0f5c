//! VariableType identifiers

use crate::model::registry::NodeCategory;

crate::define_node_ids! {
    /// VariableTypes defined by the FDI5 model
    VariableTypeId(NodeCategory::VariableType) {
        /// Variable holding a UI description (UID) document
        UIDescriptionType = 2001 => "UIDescriptionType",
    }
}
