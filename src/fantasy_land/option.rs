//! The fantasy-land encoding of an optional value.

use crate::container::OptionT;

/// An optional value in the fantasy-land encoding.
///
/// This type carries data only. Its operator surface lives on [`OptionT`];
/// convert with [`FlOption::into_option_t`] to transform the value and back
/// with [`OptionT::to_fantasy_land`] to hand it over.
///
/// # Examples
///
/// ```rust
/// use nullshield::container::OptionT;
/// use nullshield::fantasy_land::FlOption;
///
/// assert_eq!(OptionT::present(1).to_fantasy_land(), FlOption::of(1));
/// assert_eq!(OptionT::<i32>::absent().to_fantasy_land(), FlOption::empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlOption<T> {
    /// A contained value.
    Some(T),
    /// No value.
    None,
}

impl<T> FlOption<T> {
    /// Lifts a value, the convention's `of`.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Some(value)
    }

    /// The empty value, the convention's `empty`.
    #[inline]
    pub const fn empty() -> Self {
        Self::None
    }

    /// Converts back into the canonical [`OptionT`].
    #[inline]
    pub fn into_option_t(self) -> OptionT<T> {
        self.into()
    }
}

impl<T> OptionT<T> {
    /// Converts into the fantasy-land encoding, keeping variant and payload.
    #[inline]
    pub fn to_fantasy_land(self) -> FlOption<T> {
        self.into()
    }
}

impl<T> From<OptionT<T>> for FlOption<T> {
    #[inline]
    fn from(value: OptionT<T>) -> Self {
        match value {
            OptionT::Present(value) => Self::Some(value),
            OptionT::Absent => Self::None,
        }
    }
}

impl<T> From<FlOption<T>> for OptionT<T> {
    #[inline]
    fn from(value: FlOption<T>) -> Self {
        match value {
            FlOption::Some(value) => Self::Present(value),
            FlOption::None => Self::Absent,
        }
    }
}
