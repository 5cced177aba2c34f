//! Parsed, not-yet-validated country input.

/// One country as supplied by the caller: a name and the inclusive
/// lower-left `(xl, yl)` and upper-right `(xh, yh)` corners.
///
/// No validation happens here; the space crate's `Country::new` rejects
/// bad names and rectangles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryDescriptor {
    /// Country name.
    pub name: String,
    /// Lower-left x.
    pub xl: i32,
    /// Lower-left y.
    pub yl: i32,
    /// Upper-right x.
    pub xh: i32,
    /// Upper-right y.
    pub yh: i32,
}

impl CountryDescriptor {
    /// Create a descriptor.
    pub fn new(name: impl Into<String>, xl: i32, yl: i32, xh: i32, yh: i32) -> Self {
        Self {
            name: name.into(),
            xl,
            yl,
            xh,
            yh,
        }
    }
}
