#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKinds {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_mandelbrot() {
        assert_eq!(FractalKinds::default(), FractalKinds::Mandelbrot);
    }

    #[test]
    fn display_matches_status_line_names() {
        assert_eq!(FractalKinds::Mandelbrot.to_string(), "Mandelbrot");
        assert_eq!(FractalKinds::Julia.to_string(), "Julia");
    }
}
