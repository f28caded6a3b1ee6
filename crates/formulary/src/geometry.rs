/// Three-figure approximation of pi. All expected outputs of the exercise set
/// are calibrated against this constant, so do not substitute
/// `core::f64::consts::PI`.
pub const PI_APPROX: f64 = 3.14;

pub fn area_of_circle(r: f64) -> f64 {
    PI_APPROX * r * r
}

/// Volume of a cylinder with radius r and height h
pub fn volume_of_cylinder(r: f64, h: f64) -> f64 {
    area_of_circle(r) * h
}

#[derive(Clone, Debug)]
pub struct Cylinder {
    pub radius: f64,
    pub height: f64,
}

impl Cylinder {
    pub fn is_non_zero(&self) -> bool {
        self.radius > 0. && self.height > 0.
    }

    pub fn cross_section_area(&self) -> f64 {
        area_of_circle(self.radius)
    }

    pub fn volume(&self) -> f64 {
        volume_of_cylinder(self.radius, self.height)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_area_of_circle() {
        approx::assert_abs_diff_eq!(area_of_circle(1.), 3.14);
        approx::assert_abs_diff_eq!(area_of_circle(2.), 12.56);
        approx::assert_abs_diff_eq!(area_of_circle(3.), 28.26, epsilon = 1e-12);

        // negative radius is not rejected
        approx::assert_abs_diff_eq!(area_of_circle(-2.), 12.56);
    }

    #[test]
    fn test_volume_of_cylinder() {
        approx::assert_abs_diff_eq!(volume_of_cylinder(2., 5.), 62.80, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(volume_of_cylinder(3., 2.), 56.52, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(volume_of_cylinder(1., 4.), 12.56);
    }

    #[test]
    fn test_area_uses_approx_pi() {
        for r in [0., 0.5, 1., 2.5, 10.] {
            approx::assert_abs_diff_eq!(area_of_circle(r), 3.14 * r * r);
        }
    }

    #[test]
    fn test_volume_matches_area() {
        for r in [0., 0.5, 1., 2.5, 10.] {
            for h in [0., 1., 3.25, 100.] {
                approx::assert_abs_diff_eq!(
                    volume_of_cylinder(r, h),
                    area_of_circle(r) * h
                );
            }
        }
    }

    #[test]
    fn test_cylinder() {
        let c = Cylinder {
            radius: 2.,
            height: 5.,
        };
        assert!(c.is_non_zero());
        approx::assert_abs_diff_eq!(c.cross_section_area(), 12.56);
        approx::assert_abs_diff_eq!(c.volume(), 62.80, epsilon = 1e-12);

        let flat = Cylinder {
            radius: 2.,
            height: 0.,
        };
        assert!(!flat.is_non_zero());
        approx::assert_abs_diff_eq!(flat.volume(), 0.);
    }
}
