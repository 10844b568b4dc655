use crate::core::data::colour::Colour;

/// Turns one computed sample into a colour. Implementations are total.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;
}
