// nf-core/src/units.rs

use uom::si::f64::{Area as UomArea, Length as UomLength};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _a = m2(0.02);
        let _l = m(1.5);
    }
}
