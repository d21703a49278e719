#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn lighten(self, amount: f32) -> Self {
        match self.to_oklch() {
            Self::Oklch { l, c, h } => Self::Oklch {
                l: (l + amount).clamp(0.0, 1.0),
                c,
                h,
            },
            other => other,
        }
    }

    pub fn darken(self, amount: f32) -> Self {
        self.lighten(-amount)
    }

    /// Convert to Oklch so lightness adjustments stay perceptually uniform.
    fn to_oklch(self) -> Self {
        match self {
            Self::Oklch { .. } => self,
            Self::Rgb { r, g, b } => {
                use palette::{IntoColor, Oklch, Srgb};

                let srgb = Srgb::new(r, g, b).into_format::<f32>();
                let oklch: Oklch = srgb.into_color();
                Self::Oklch {
                    l: oklch.l,
                    c: oklch.chroma,
                    h: oklch.hue.into_positive_degrees(),
                }
            }
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
