//! Field Advice Example
//!
//! Runs a handful of paddy readings through both branches of the engine:
//! crisp irrigation / fertilizer / pesticide doses from the fuzzy rules and
//! a named diagnosis from a small knowledge base.
//!
//! ## What You'll Learn
//!
//! - Validating and clamping raw readings
//! - Evaluating a reading with a shared engine
//! - Reading the firing trace behind a dose
//! - Spotting low-confidence diagnoses
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_field_advice
//! ```

use paddyguard_core::{
    Advisor, KnowledgeRule, Rainfall, ReadingValidator, SensorReading, Validator, DEFAULT_ENGINE,
};

const KNOWLEDGE_BASE: &str = r#"[
  {
    "id": "R01",
    "description": "Tanah masam, miskin hara dan kering",
    "conditions": { "ph": "masam", "tds": "kurang", "kelembaban": "kering", "curah_hujan": "cerah" },
    "results": {
      "status_t": "Buruk",
      "air_r": "Irigasi segera",
      "pupuk_q": "Tunda pemupukan",
      "pestisida_s": "Dosis rendah",
      "action_steps": ["Tambahkan kapur dolomit", "Genangi petak 5 cm"],
      "cf": 0.9
    }
  },
  {
    "id": "R02",
    "description": "Kondisi optimal",
    "conditions": { "ph": "netral", "tds": "ideal", "kelembaban": "lembab", "curah_hujan": "cerah" },
    "results": {
      "status_t": "Baik",
      "air_r": "Pertahankan",
      "pupuk_q": "Pemupukan pemeliharaan",
      "pestisida_s": "Sesuai jadwal",
      "action_steps": ["Pantau rutin"],
      "cf": 0.95
    }
  }
]"#;

fn main() {
    println!("PaddyGuard Field Advice Example");
    println!("===============================\n");

    let knowledge_base: Vec<KnowledgeRule> = match serde_json::from_str(KNOWLEDGE_BASE) {
        Ok(kb) => kb,
        Err(e) => {
            eprintln!("Knowledge base unreadable: {e}");
            return;
        }
    };

    let validator = ReadingValidator::default();
    let advisor = Advisor::new(&DEFAULT_ENGINE);

    let readings = [
        ("dry acidic plot", SensorReading::new(250.0, 5.5, 20.0, Rainfall::Clear)),
        ("healthy plot", SensorReading::new(800.0, 7.0, 60.0, Rainfall::Clear)),
        ("flooded plot", SensorReading::new(2200.0, 8.5, 90.0, Rainfall::from_amount(12.0))),
        ("faulty probe", SensorReading::new(5600.0, 7.1, -4.0, Rainfall::Clear)),
    ];

    for (label, raw) in readings {
        println!("{label}: {raw:?}");

        let reading = match validator.validate(&raw) {
            Ok(()) => raw,
            Err(e) => {
                let clamped = validator.clamp(raw);
                println!("  ⚠ {e}; using {clamped:?}");
                clamped
            }
        };

        let advice = advisor.evaluate(&reading, &knowledge_base);
        println!("  Doses: {}", advice.doses);

        let outputs = advisor.aggregate(&reading);
        for firing in outputs.irrigation.trace().iter().filter(|f| f.strength > 0.0) {
            println!("    irrigation rule {} -> {} ({:.2})", firing.rule, firing.consequent, firing.strength);
        }

        let diagnosis = &advice.diagnosis;
        if diagnosis.is_placeholder() {
            println!("  Diagnosis: no matching rule");
        } else {
            println!(
                "  Diagnosis: {} [{}] at {:.1}%",
                diagnosis.rule().description,
                diagnosis.status(),
                diagnosis.confidence_pct()
            );
            if diagnosis.is_low_confidence() {
                println!("  ⚠ Low confidence, verify in the field");
            }
            for step in diagnosis.action_steps() {
                println!("    - {step}");
            }
        }
        println!();
    }
}
