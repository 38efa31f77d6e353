use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtmError {
    #[error("{name} {value} is out of range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Zone letter '{0}' is not supported")]
    UnsupportedZone(char),

    #[error("Latitude {0} lies in a polar region not covered by UTM bands")]
    UnsupportedRegion(f64),
}

impl UtmError {
    /// Check `value` against the closed interval `[min, max]`.
    ///
    /// NaN never passes.
    pub(crate) fn check_range(
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<f64, UtmError> {
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            log::debug!("rejected {name} {value}: outside [{min}, {max}]");
            Err(UtmError::OutOfRange {
                name,
                value,
                min,
                max,
            })
        }
    }

    /// Accept any finite value; NaN and ±inf are reported as out of range.
    pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, UtmError> {
        if value.is_finite() {
            Ok(value)
        } else {
            log::debug!("rejected {name} {value}: not finite");
            Err(UtmError::OutOfRange {
                name,
                value,
                min: f64::NEG_INFINITY,
                max: f64::INFINITY,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_inclusive_bounds() {
        assert_eq!(UtmError::check_range("latitude", 90.0, -90.0, 90.0), Ok(90.0));
        assert_eq!(UtmError::check_range("latitude", -90.0, -90.0, 90.0), Ok(-90.0));
    }

    #[test]
    fn test_check_range_rejects_nan() {
        let err = UtmError::check_range("longitude", f64::NAN, -180.0, 180.0).unwrap_err();
        assert!(matches!(err, UtmError::OutOfRange { name: "longitude", .. }));
    }

    #[test]
    fn test_check_finite() {
        assert_eq!(UtmError::check_finite("easting", -1.0e9), Ok(-1.0e9));
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                UtmError::check_finite("northing", v),
                Err(UtmError::OutOfRange { name: "northing", .. })
            ));
        }
    }

    #[test]
    fn test_messages_name_the_value() {
        let err = UtmError::check_range("zone number", 61.0, 1.0, 60.0).unwrap_err();
        assert_eq!(err.to_string(), "zone number 61 is out of range [1, 60]");
        assert_eq!(
            UtmError::UnsupportedZone('I').to_string(),
            "Zone letter 'I' is not supported"
        );
    }
}
