pub static THRESHOLD_HELP: &str = "Binarization threshold

Grayscale samples below the threshold become 1 (ink) in the
PBM stage, the rest become 0.

Range is between 0 and 256. 0 gives a blank bitmap,
256 gives a fully inked one";

pub static LENIENT_HELP: &str = "Tolerate surplus pixel values

By default a stage whose pixel value count does not match
its header is rejected. With this flag, values past the
expected count are dropped with a warning.

Too few values are always an error";

pub static RESCALE_HELP: &str = "Honor the maximum value line

Samples are assumed to be in 0..=255 and the header's
maximum value is only checked for presence.

With this flag samples are rescaled to 0..=255 using
the maximum value found in the header";

pub static VIEW_HELP: &str = "View the stages side by side

The color, grayscale and binary stages are placed next to
each other, written as a temporary PNG and opened in the
platform's default image viewer";
