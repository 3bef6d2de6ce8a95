//! The fixed catalog of renderable instrument parts.
//!
//! Order matters: a part's position in the catalog is the numeric
//! selector the OpenSCAD model dispatches on (`make_part=<index>`).
//! Index 0 is the `all` pseudo-part, which renders the whole model in
//! one piece and is skipped when rendering parts individually.

/// Part names for the tenor model, in selector order.
const TENOR_PARTS: &[&str] = &[
    "all",
    "neck_head",
    "neck_heel",
    "body_neck",
    "body_tail",
    "fb_head",
    "fb_heel",
    "bridge",
    "nut",
];

/// Ordered list of known part names. Immutable after construction.
#[derive(Debug, Clone)]
pub struct PartCatalog {
    names: &'static [&'static str],
}

impl PartCatalog {
    /// The catalog for the tenor instrument model.
    pub fn tenor() -> Self {
        Self { names: TENOR_PARTS }
    }

    /// All part names in selector order, including the `all` pseudo-part.
    pub fn names(&self) -> &[&'static str] {
        self.names
    }

    /// Number of catalog entries, counting the `all` pseudo-part.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Selector index for a part name, or `None` if unknown.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|p| *p == name)
    }

    /// The individually renderable parts: every entry except the `all`
    /// pseudo-part at index 0, in ascending selector order.
    pub fn individual_parts(&self) -> impl Iterator<Item = (usize, &'static str)> + '_ {
        self.names.iter().enumerate().skip(1).map(|(i, p)| (i, *p))
    }
}

impl Default for PartCatalog {
    fn default() -> Self {
        Self::tenor()
    }
}
