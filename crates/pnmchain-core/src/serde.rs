#![cfg(feature = "serde")]

use serde::ser::*;

use crate::buffer::PixelBuffer;
use crate::colorspace::ColorSpace;

impl Serialize for ColorSpace {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // colorspace serialization is simply it's debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

/// Buffers serialize as a summary, samples are left out
impl Serialize for PixelBuffer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PixelBuffer", 4)?;

        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.serialize_field("colorspace", &self.colorspace())?;
        state.serialize_field("max_value", &self.max_value())?;

        state.end()
    }
}
