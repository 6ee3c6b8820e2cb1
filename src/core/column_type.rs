use serde::{Deserialize, Serialize};

/// Abstract column-type taxonomy of the schema document.
///
/// The `DataType` field of the document carries these names as case-sensitive
/// string literals (`"ID"`, `"GUID"`, `"ForeignKey"`, ...). Unknown names are
/// rejected at parse time rather than skipped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ColumnType {
    /// Auto-incrementing integer primary key
    #[serde(rename = "ID")]
    Identity,
    /// Fixed-format identifier string, defaults to the nil UUID
    #[serde(rename = "GUID")]
    Guid,
    /// Integer reference to another table's key
    ForeignKey,
    /// Plain integer
    Numeric,
    /// Fixed-precision real, `Size` carries `"precision,scale"`
    Decimal,
    /// Bounded text, `Size` carries the maximum length
    String,
    /// Unbounded text
    Text,
    /// Timestamp (native or text, dialect-dependent)
    DateTime,
    /// 0/1 small integer
    Boolean,
}

impl ColumnType {
    /// Types whose column definition must carry a `Size` attribute.
    pub const fn requires_size(self) -> bool {
        matches!(self, Self::Decimal | Self::String)
    }

    /// Whether this type emits a PRIMARY KEY clause in generated DDL.
    pub const fn is_identity(self) -> bool {
        matches!(self, Self::Identity)
    }
}
