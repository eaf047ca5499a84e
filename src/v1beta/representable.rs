//! Conversions from application values into [`Part`] sequences.
//!
//! Strings, parts and collections of them implement [`PartsRepresentable`]. Inputs whose
//! conversion can fail (images) implement only [`ThrowingPartsRepresentable`], which every
//! [`PartsRepresentable`] also gets for free.
//!
//! Heterogeneous inputs can be mixed through trait objects:
//!
//! ```
//! use generative_ai::v1beta::{Part, PartsRepresentable};
//!
//! let inputs: [&dyn PartsRepresentable; 3] = [&"a", &Part::from("x"), &["b", "c"]];
//! assert_eq!(inputs.to_parts().len(), 4);
//! ```

use super::content::{FileData, FunctionCall, FunctionResponse, InlineData, Part};
use super::media;

pub trait PartsRepresentable {
    fn to_parts(&self) -> Vec<Part>;
}

pub trait ThrowingPartsRepresentable {
    fn try_to_parts(&self) -> Result<Vec<Part>, media::Error>;
}

impl<T> ThrowingPartsRepresentable for T
where
    T: PartsRepresentable + ?Sized,
{
    fn try_to_parts(&self) -> Result<Vec<Part>, media::Error> {
        Ok(self.to_parts())
    }
}

impl PartsRepresentable for str {
    fn to_parts(&self) -> Vec<Part> {
        vec![Part::Text(self.to_string())]
    }
}

impl PartsRepresentable for String {
    fn to_parts(&self) -> Vec<Part> {
        self.as_str().to_parts()
    }
}

impl PartsRepresentable for Part {
    fn to_parts(&self) -> Vec<Part> {
        vec![self.clone()]
    }
}

impl PartsRepresentable for InlineData {
    fn to_parts(&self) -> Vec<Part> {
        vec![Part::InlineData(self.clone())]
    }
}

impl PartsRepresentable for FileData {
    fn to_parts(&self) -> Vec<Part> {
        vec![Part::FileData(self.clone())]
    }
}

impl PartsRepresentable for FunctionCall {
    fn to_parts(&self) -> Vec<Part> {
        vec![Part::FunctionCall(self.clone())]
    }
}

impl PartsRepresentable for FunctionResponse {
    fn to_parts(&self) -> Vec<Part> {
        vec![Part::FunctionResponse(self.clone())]
    }
}

impl<T> PartsRepresentable for [T]
where
    T: PartsRepresentable,
{
    fn to_parts(&self) -> Vec<Part> {
        self.iter().flat_map(PartsRepresentable::to_parts).collect()
    }
}

impl<T, const N: usize> PartsRepresentable for [T; N]
where
    T: PartsRepresentable,
{
    fn to_parts(&self) -> Vec<Part> {
        self.as_slice().to_parts()
    }
}

impl<T> PartsRepresentable for Vec<T>
where
    T: PartsRepresentable,
{
    fn to_parts(&self) -> Vec<Part> {
        self.as_slice().to_parts()
    }
}

impl<T> PartsRepresentable for &T
where
    T: PartsRepresentable + ?Sized,
{
    fn to_parts(&self) -> Vec<Part> {
        (**self).to_parts()
    }
}

impl<T> PartsRepresentable for Box<T>
where
    T: PartsRepresentable + ?Sized,
{
    fn to_parts(&self) -> Vec<Part> {
        (**self).to_parts()
    }
}
