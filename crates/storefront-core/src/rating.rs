/// Number of units in the star widget.
pub const STAR_UNITS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Filled,
    Empty,
}

impl Star {
    /// Bootstrap icon class for the web card.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Star::Filled => "bi bi-star-fill",
            Star::Empty => "bi bi-star",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Star::Filled => '★',
            Star::Empty => '☆',
        }
    }
}

/// Star widget state: `floor(rate)` filled units out of [`STAR_UNITS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarRating {
    filled: u8,
}

impl StarRating {
    pub fn from_rate(rate: f64) -> Self {
        // NaN saturates to 0 on the cast.
        let filled = rate.floor().clamp(0.0, f64::from(STAR_UNITS)) as u8;
        Self { filled }
    }

    pub fn filled(&self) -> u8 {
        self.filled
    }

    pub fn empty(&self) -> u8 {
        STAR_UNITS - self.filled
    }

    pub fn units(&self) -> impl Iterator<Item = Star> + '_ {
        (0..STAR_UNITS).map(move |i| if i < self.filled { Star::Filled } else { Star::Empty })
    }

    pub fn glyphs(&self) -> String {
        self.units().map(|star| star.glyph()).collect()
    }
}
