//! Method identifiers
//!
//! `GetEditContext`, `RegisterNodes`, `Apply` and `Reset` are declared once
//! in the model and referenced from every device that supports edit
//! contexts, which is why they carry no owning type prefix.

use super::variables::VariableId;
use crate::model::registry::NodeCategory;

crate::define_node_ids! {
    /// Methods defined by the FDI5 model
    MethodId(NodeCategory::Method) {
        ActionServiceType_InvokeAction = 7001 => "InvokeAction",
        ActionServiceType_RespondAction = 7002 => "RespondAction",
        ActionServiceType_AbortAction = 7003 => "AbortAction",
        DirectDeviceAccessType_InitDirectAccess = 7004 => "InitDirectAccess",
        DirectDeviceAccessType_EndDirectAccess = 7005 => "EndDirectAccess",
        DirectDeviceAccessType_Transfer = 7006 => "Transfer",
        GetEditContext = 7007 => "GetEditContext",
        RegisterNodes = 7008 => "RegisterNodes",
        /// Commit the edit context to the device
        Apply = 7009 => "Apply",
        /// Discard the edit context
        Reset = 7010 => "Reset",
    }
}

impl MethodId {
    /// `InputArguments` property of the method, if it takes arguments
    pub fn input_arguments(self) -> Option<VariableId> {
        self.argument_property("InputArguments")
    }

    /// `OutputArguments` property of the method, if it returns values
    pub fn output_arguments(self) -> Option<VariableId> {
        self.argument_property("OutputArguments")
    }

    fn argument_property(self, suffix: &str) -> Option<VariableId> {
        let symbol = format!("{}_{}", self.name(), suffix);
        VariableId::from_name(&symbol)
    }
}
