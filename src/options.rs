//! Configuration options for report rendering.
//!
//! This module provides [`RenderOptions`], which controls how the report
//! renderer lays out its output. The reference format indents each pet line
//! four spaces beneath its owner; that is the default here.
//!
//! ## Examples
//!
//! ```rust
//! use menagerie::{render_with_options, Person, Pet, RenderOptions};
//! use chrono::NaiveDate;
//!
//! let birthday = NaiveDate::from_ymd_opt(1986, 1, 1).unwrap();
//! let mut david = Person::new("David", "Fowler", birthday);
//! david.add_pet(Pet::cat("Beyonce"));
//!
//! // Widen the pet indent to 8 spaces
//! let options = RenderOptions::new().with_indent(8);
//! let report = render_with_options(&[david], options);
//! assert!(report.contains("        Beyonce"));
//! ```

/// Configuration options for report rendering.
///
/// Controls the indent prefix of pet lines. Person lines are never indented.
///
/// # Examples
///
/// ```rust
/// use menagerie::RenderOptions;
///
/// // Default: four-space pet indent
/// let options = RenderOptions::new();
/// assert_eq!(options.indent, 4);
///
/// // Custom indent
/// let options = RenderOptions::new().with_indent(2);
/// assert_eq!(options.indent, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { indent: 4 }
    }
}

impl RenderOptions {
    /// Creates default options (four-space pet indent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use menagerie::RenderOptions;
    ///
    /// let options = RenderOptions::new();
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces before each pet line).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use menagerie::RenderOptions;
    ///
    /// let options = RenderOptions::new().with_indent(8);
    /// assert_eq!(options.indent, 8);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
