//! Identifier tables, one enum per node category
//!
//! | Category     | Enum             | Block  |
//! |--------------|------------------|--------|
//! | ObjectType   | `ObjectTypeId`   | 1xxx   |
//! | VariableType | `VariableTypeId` | 2xxx   |
//! | DataType     | `DataTypeId`     | 3xxx   |
//! | Object       | `ObjectId`       | 5xxx, 15xxx |
//! | Variable     | `VariableId`     | 6xxx, 15xxx |
//! | Method       | `MethodId`       | 7xxx   |
//!
//! `15xxx` holds the namespace metadata object and its properties.

#[macro_use]
mod macros;

pub mod data_types;
pub mod methods;
pub mod object_types;
pub mod objects;
pub mod variable_types;
pub mod variables;

pub use data_types::DataTypeId;
pub use methods::MethodId;
pub use object_types::ObjectTypeId;
pub use objects::{Encoding, ObjectId};
pub use variable_types::VariableTypeId;
pub use variables::VariableId;
