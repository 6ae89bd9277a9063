const GRAMS_PER_KILOGRAM: f64 = 1000.0;

pub fn grams_to_kilograms(grams: f64) -> f64 {
    grams / GRAMS_PER_KILOGRAM
}

pub fn kilograms_to_grams(kilograms: f64) -> f64 {
    kilograms * GRAMS_PER_KILOGRAM
}
