//! Declarative hydration rules for [`Record`](super::Record).

/// Which attributes of a raw payload turn into nested records.
///
/// Schemas are `const` items that reference each other, so a whole payload
/// tree (a detected face with its rectangle, landmarks and attributes) is
/// described statically and walked once at construction time.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordSchema {
    /// Type name of records built with this schema.
    pub name: &'static str,
    /// Attributes holding a single nested object.
    pub nested: &'static [(&'static str, &'static RecordSchema)],
    /// Attributes holding an array of nested objects.
    pub lists: &'static [(&'static str, &'static RecordSchema)],
    /// When set, every object-valued attribute is wrapped with this schema,
    /// whatever its name.
    pub each: Option<&'static RecordSchema>,
}

impl RecordSchema {
    /// Schema without any nested attributes.
    pub const fn plain(name: &'static str) -> Self {
        Self {
            name,
            nested: &[],
            lists: &[],
            each: None,
        }
    }

    pub(crate) fn nested_schema(&self, attribute: &str) -> Option<&'static RecordSchema> {
        lookup(self.nested, attribute)
    }

    pub(crate) fn list_schema(&self, attribute: &str) -> Option<&'static RecordSchema> {
        lookup(self.lists, attribute)
    }
}

/// Schema used for records that are not hydrated at all.
pub const UNTYPED: RecordSchema = RecordSchema::plain("Record");

fn lookup(
    table: &'static [(&'static str, &'static RecordSchema)],
    attribute: &str,
) -> Option<&'static RecordSchema> {
    table
        .iter()
        .find(|(name, _)| *name == attribute)
        .map(|(_, schema)| *schema)
}
