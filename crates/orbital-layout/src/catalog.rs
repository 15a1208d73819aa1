//! Reference systems for demos and tests

use units::{Length, Time};

use crate::body::{BodyKind, CelestialBody, GeometryHint};

fn km(value: f64) -> Length {
    Length::from_km(value)
}

fn au(value: f64) -> Length {
    Length::from_au(value)
}

/// The Sun with its planets, major moons, Saturn's main rings, the main
/// asteroid belt and Pluto/Charon
pub fn solar_system() -> Vec<CelestialBody> {
    let gas_giant = |id: &str, radius: f64, sma: f64, period_days: f64| {
        CelestialBody::planet(id, "sun", km(radius), au(sma))
            .with_geometry(GeometryHint::GasGiant)
            .with_period(Time::from_days(period_days))
    };
    let rocky = |id: &str, radius: f64, sma: f64, period_days: f64| {
        CelestialBody::planet(id, "sun", km(radius), au(sma))
            .with_geometry(GeometryHint::Terrestrial)
            .with_period(Time::from_days(period_days))
    };
    let moon = |id: &str, parent: &str, radius: f64, sma: f64, period_days: f64| {
        CelestialBody::moon(id, parent, km(radius), au(sma)).with_period(Time::from_days(period_days))
    };

    vec![
        CelestialBody::star("sun", km(695_700.0)).with_name("Sun"),
        rocky("mercury", 2439.7, 0.387, 87.97),
        rocky("venus", 6051.8, 0.723, 224.70),
        rocky("earth", 6371.0, 1.0, 365.25),
        moon("moon", "earth", 1737.4, 0.00257, 27.32),
        rocky("mars", 3389.5, 1.524, 686.98),
        moon("phobos", "mars", 11.1, 0.0000628, 0.319),
        moon("deimos", "mars", 6.2, 0.000157, 1.263),
        CelestialBody::belt("asteroid-belt", "sun", au(2.2), au(3.2)).with_name("Main Belt"),
        gas_giant("jupiter", 69_911.0, 5.203, 4332.59),
        moon("io", "jupiter", 1821.6, 0.00282, 1.769),
        moon("europa", "jupiter", 1560.8, 0.00449, 3.551),
        moon("ganymede", "jupiter", 2634.1, 0.00716, 7.155),
        moon("callisto", "jupiter", 2410.3, 0.01258, 16.689),
        gas_giant("saturn", 58_232.0, 9.537, 10_759.22),
        CelestialBody::ring("saturn-rings", "saturn", km(74_500.0), km(140_220.0)),
        moon("mimas", "saturn", 198.2, 0.00124, 0.942),
        moon("enceladus", "saturn", 252.1, 0.00159, 1.370),
        moon("titan", "saturn", 2574.7, 0.00817, 15.945),
        moon("iapetus", "saturn", 734.5, 0.0238, 79.32),
        gas_giant("uranus", 25_362.0, 19.19, 30_688.5),
        gas_giant("neptune", 24_622.0, 30.07, 60_182.0),
        moon("triton", "neptune", 1353.4, 0.00237, -5.877),
        CelestialBody::orbiting("pluto", BodyKind::DwarfPlanet, "sun", km(1188.3), au(39.48))
            .with_period(Time::from_days(90_560.0)),
        moon("charon", "pluto", 606.0, 0.000131, 6.387),
    ]
}

/// Two sun-like stars orbiting their common barycenter, with a planet
/// around the primary
pub fn binary_system() -> Vec<CelestialBody> {
    vec![
        CelestialBody::root("barycenter", BodyKind::Barycenter, None),
        CelestialBody::orbiting("primary", BodyKind::Star, "barycenter", km(695_700.0), au(0.1)),
        CelestialBody::orbiting("secondary", BodyKind::Star, "barycenter", km(480_000.0), au(0.2)),
        CelestialBody::planet("primary-b", "primary", km(7000.0), au(0.03)),
    ]
}
