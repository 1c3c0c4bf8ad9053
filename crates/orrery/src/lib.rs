//! orrery — scalar and 2D value types for the orrery toolkit
//!
//! Everything downstream (`orrery-la`, `orrery-motion`) is generic over the
//! [`Scalar`] trait, so the same code runs in f32 and f64.
//!
//! - `Vec2` is a direction/displacement, `Point2` is a position
//! - All types are `Copy` values; operations return new values
//! - `#![no_std]`, with float intrinsics from `std` or `libm`

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod scalar;
mod vec2;
mod point2;

pub use scalar::Scalar;
pub use vec2::Vec2;
pub use point2::Point2;

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: All fields are the same float type, #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec2<f32>);
    impl_pod!(Vec2<f64>);
    impl_pod!(Point2<f32>);
    impl_pod!(Point2<f64>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vec_round_trip_through_displacement() {
        let a = Point2::new(1.0, -2.0);
        let b = Point2::new(4.0, 2.0);
        let d = b - a;
        assert_eq!(d, Vec2::new(3.0, 4.0));
        assert_eq!(a + d, b);
        assert!((d.norm() - 5.0).abs() < 1e-12);
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn vec2_is_pod() {
        let v = [Vec2::new(1.0f32, 2.0), Vec2::new(3.0, 4.0)];
        let flat: &[f32] = bytemuck::cast_slice(&v);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);
    }
}
