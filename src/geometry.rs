use serde::Serialize;

/// Axis-aligned box around a set of (longitude, latitude) points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: (f64, f64),
    pub max: (f64, f64),
}

impl Bounds {
    /// Smallest box containing every point, or `None` for no points.
    ///
    /// # Examples
    /// ```
    /// use tube_map::geometry::Bounds;
    ///
    /// let bounds = Bounds::from_points([(0.0, 1.0), (2.0, -1.0)]).unwrap();
    /// assert_eq!(bounds.min, (0.0, -1.0));
    /// assert_eq!(bounds.max, (2.0, 1.0));
    /// assert!(Bounds::from_points(Vec::<(f64, f64)>::new()).is_none());
    /// ```
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points.into_iter().fold(None, |bounds, (x, y)| {
            Some(match bounds {
                None => Self { min: (x, y), max: (x, y) },
                Some(Self { min, max }) => Self {
                    min: (min.0.min(x), min.1.min(y)),
                    max: (max.0.max(x), max.1.max(y)),
                },
            })
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.0 - self.min.0
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.1 - self.min.1
    }

    /// Grow each side by `fraction` of the box's extent on that axis
    #[must_use]
    pub fn padded(&self, fraction: f64) -> Self {
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        Self {
            min: (self.min.0 - dx, self.min.1 - dy),
            max: (self.max.0 + dx, self.max.1 + dy),
        }
    }
}
