//! Synthetic forecast tables: the bundled fixture and a seeded generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde_json::{json, Value};

use crate::features::tables::WIND_DIRECTION_DEG;
use crate::math::round1;

/// Shape of a generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSpec {
    /// Number of forecast days. The first two carry three sub-slots each,
    /// the rest are single-slot, matching the provider's shape.
    pub days: usize,
    pub seed: u64,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self { days: 6, seed: 7 }
    }
}

const DAY_NAMES: [&str; 7] = [
    "Sexta-Feira",
    "Sábado",
    "Domingo",
    "Segunda-Feira",
    "Terça-Feira",
    "Quarta-Feira",
    "Quinta-Feira",
];

const SLOT_NAMES: [&str; 3] = ["manha", "tarde", "noite"];

const INTENSITY_NAMES: [&str; 3] = ["Fracos", "Moderados", "Fortes"];

/// The five-day capital forecast used as the demo table: Friday and
/// Saturday with three sub-slots each, Sunday through Tuesday single-slot;
/// nine records once flattened.
pub fn fixture_forecast() -> Vec<Value> {
    vec![
        json!([
            {
                "day_week": "Sexta-Feira", "dir_air": "S-SE", "hour": "manha",
                "int_air": "Fracos", "sunrise": "06h38", "sunset": "18h32",
                "temp_max": 32, "temp_max_goes_to": "Em declínio",
                "temp_min": 19, "temp_min_goes_to": "Ligeiro Declínio",
                "umi_max": 100, "umi_min": 50
            },
            {
                "day_week": "Sexta-Feira", "dir_air": "SE-S", "hour": "tarde",
                "int_air": "Fracos", "sunrise": "06h38", "sunset": "18h32",
                "temp_max": 32, "temp_max_goes_to": "Em declínio",
                "temp_min": 19, "temp_min_goes_to": "Ligeiro Declínio",
                "umi_max": 100, "umi_min": 50
            },
            {
                "day_week": "Sexta-Feira", "dir_air": "S-SE", "hour": "noite",
                "int_air": "Fracos", "sunrise": "06h38", "sunset": "18h32",
                "temp_max": 32, "temp_max_goes_to": "Em declínio",
                "temp_min": 19, "temp_min_goes_to": "Ligeiro Declínio",
                "umi_max": 100, "umi_min": 50
            }
        ]),
        json!([
            {
                "day_week": "Sábado", "dir_air": "SE-S", "hour": "manha",
                "int_air": "Fracos", "sunrise": "06h38", "sunset": "18h31",
                "temp_max": 31, "temp_max_goes_to": "Em declínio",
                "temp_min": 20, "temp_min_goes_to": "Em declínio",
                "umi_max": 100, "umi_min": 50
            },
            {
                "day_week": "Sábado", "dir_air": "SE-E", "hour": "tarde",
                "int_air": "Fracos", "sunrise": "06h38", "sunset": "18h31",
                "temp_max": 31, "temp_max_goes_to": "Em declínio",
                "temp_min": 20, "temp_min_goes_to": "Em declínio",
                "umi_max": 100, "umi_min": 50
            },
            {
                "day_week": "Sábado", "dir_air": "SE-E", "hour": "noite",
                "int_air": "Moderados", "sunrise": "06h38", "sunset": "18h31",
                "temp_max": 31, "temp_max_goes_to": "Em declínio",
                "temp_min": 20, "temp_min_goes_to": "Em declínio",
                "umi_max": 95, "umi_min": 75
            }
        ]),
        json!({
            "day_week": "Domingo", "dir_air": "SE-E", "hour": "noite",
            "int_air": "Fracos", "sunrise": "06h39", "sunset": "18h30",
            "temp_max": 32, "temp_max_goes_to": "Ligeiro Declínio",
            "temp_min": 18, "temp_min_goes_to": "Em declínio",
            "umi_max": 90, "umi_min": 40
        }),
        json!({
            "day_week": "Segunda-Feira", "dir_air": "SE-E", "hour": "noite",
            "int_air": "Fracos", "sunrise": "06h39", "sunset": "18h29",
            "temp_max": 33, "temp_max_goes_to": "Em elevação",
            "temp_min": 19, "temp_min_goes_to": "Estável",
            "umi_max": 90, "umi_min": 30
        }),
        json!({
            "day_week": "Terça-Feira", "dir_air": "E-NE", "hour": "noite",
            "int_air": "Fracos", "sunrise": "06h39", "sunset": "18h28",
            "temp_max": 35, "temp_max_goes_to": "Estável",
            "temp_min": 18, "temp_min_goes_to": "Estável",
            "umi_max": 90, "umi_min": 30
        }),
    ]
}

/// Generate a synthetic forecast table; a given `SampleSpec` always yields
/// the same table.
pub fn generate_forecast(spec: &SampleSpec) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(spec.seed);

    (0..spec.days)
        .map(|day| {
            let day_week = DAY_NAMES[day % DAY_NAMES.len()];
            if day < 2 {
                let slots: Vec<Value> = SLOT_NAMES
                    .iter()
                    .map(|slot| generate_record(&mut rng, day_week, slot))
                    .collect();
                Value::Array(slots)
            } else {
                generate_record(&mut rng, day_week, "noite")
            }
        })
        .collect()
}

fn generate_record(rng: &mut StdRng, day_week: &str, hour: &str) -> Value {
    // Draw a unit normal and scale it; keeps the distribution construction
    // infallible.
    let z: f64 = rng.sample(StandardNormal);
    let temp_max = round1((30.0 + 2.5 * z).clamp(22.0, 40.0));
    let temp_min = round1(temp_max - rng.gen_range(8.0..=14.0));

    let umi_max: f64 = rng.gen_range(60.0f64..=100.0).round();
    let umi_min = (umi_max - rng.gen_range(20.0..=50.0)).max(5.0).round();

    let dir_air = WIND_DIRECTION_DEG.entries[rng.gen_range(0..WIND_DIRECTION_DEG.entries.len())].0;
    let int_air = INTENSITY_NAMES[rng.gen_range(0..INTENSITY_NAMES.len())];

    let sunrise = format!("{:02}h{:02}", rng.gen_range(5..8), rng.gen_range(0..60));
    let sunset = format!("{:02}h{:02}", rng.gen_range(17..20), rng.gen_range(0..60));

    json!({
        "day_week": day_week,
        "dir_air": dir_air,
        "hour": hour,
        "int_air": int_air,
        "sunrise": sunrise,
        "sunset": sunset,
        "temp_max": temp_max,
        "temp_min": temp_min,
        "umi_max": umi_max,
        "umi_min": umi_min
    })
}
