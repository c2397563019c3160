use rand::Rng;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerKind {
    Ammo,
    Speed,
    Health,
}

impl PowerKind {
    pub const ALL: [PowerKind; 3] = [PowerKind::Ammo, PowerKind::Speed, PowerKind::Health];

    /// One uniform draw over the three kinds
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn color(&self) -> Color {
        match self {
            PowerKind::Ammo => Color::White,
            PowerKind::Speed => Color::Green,
            PowerKind::Health => Color::Red,
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            PowerKind::Ammo => "ammo",
            PowerKind::Speed => "speed",
            PowerKind::Health => "health",
        }
    }
}

/// Requested power for a new power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerChoice {
    Fixed(PowerKind),
    Random,
}

impl PowerChoice {
    pub fn resolve(self, rng: &mut impl Rng) -> PowerKind {
        match self {
            PowerChoice::Fixed(kind) => kind,
            PowerChoice::Random => PowerKind::random(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_fixed_choice_ignores_rng() {
        let mut rng = StdRng::seed_from_u64(1);
        for kind in PowerKind::ALL {
            assert_eq!(PowerChoice::Fixed(kind).resolve(&mut rng), kind);
        }
    }

    #[test]
    fn test_random_choice_reaches_every_kind() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            match PowerChoice::Random.resolve(&mut rng) {
                PowerKind::Ammo => seen[0] = true,
                PowerKind::Speed => seen[1] = true,
                PowerKind::Health => seen[2] = true,
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_random_choice_is_deterministic_per_seed() {
        let draws = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| PowerKind::random(&mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(draws(99), draws(99));
    }

    // Only three outcomes exist, so no power-up is ever left without a color.
    #[test]
    fn test_every_kind_has_a_visible_color() {
        for kind in PowerKind::ALL {
            assert_ne!(kind.color(), Color::Reset);
            assert_ne!(kind.color(), Color::Black);
        }
    }
}
