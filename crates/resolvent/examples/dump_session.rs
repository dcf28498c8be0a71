//! Run a resolution session on a CNF expression and dump every step, the proof and its JSON.
//!
//! Usage: cargo run --example dump_session -- "{A, B} {~A, C} {~B, C} {~C}" [--unicode]

use resolvent::{ModelConfig, Notation, ResolutionModel, StepPlan};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let unicode = args.iter().any(|a| a == "--unicode");
    let text = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(String::as_str)
        .unwrap_or("{A, B} {~A, C} {~B, C} {~C}");

    let config = ModelConfig {
        notation: if unicode { Notation::Unicode } else { Notation::Ascii },
        ..Default::default()
    };
    let mut model = match ResolutionModel::parse_with_config(text, config) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let notation = model.config().notation;

    println!("=== INPUT ({} clauses) ===", model.num_clauses());
    for (i, clause) in model.clauses().enumerate() {
        println!("{:3}: {}", i, clause.display(notation));
    }

    println!("\n=== STEPS ===");
    'saturate: loop {
        let before = model.num_clauses();
        for left in 0..before {
            for right in left + 1..before {
                let pivots = match model.plan_step(left, right) {
                    Ok(StepPlan::Reject) | Err(_) => continue,
                    Ok(StepPlan::Resolve(literal)) => vec![literal],
                    Ok(StepPlan::Choose(candidates)) => candidates,
                };
                for pivot in pivots {
                    match model.resolve(left, right, pivot) {
                        Ok(outcome) if outcome.is_added() => {
                            let idx = outcome.index();
                            println!(
                                "{:3}: [{}] x [{}] on {} -> {}",
                                idx,
                                left,
                                right,
                                pivot.display(notation),
                                model.get(idx).map(|c| c.display(notation).to_string()).unwrap_or_default()
                            );
                        }
                        Ok(_) => {}
                        Err(e) => {
                            println!("stopped: {}", e);
                            break 'saturate;
                        }
                    }
                    if model.has_contradiction() {
                        break 'saturate;
                    }
                }
            }
        }
        if model.num_clauses() == before {
            break;
        }
    }

    match model.get_proof() {
        Ok(proof) => {
            println!("\n=== PROOF ({} inferences) ===", proof.num_inferences());
            println!("{}", proof.render(notation));
            match model.verify_proof(&proof) {
                Ok(()) => println!("\nProof verified"),
                Err(e) => println!("\nProof verification failed: {}", e),
            }
            println!("\n=== JSON ===");
            match serde_json::to_string_pretty(&proof.to_json()) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("error: {}", e),
            }
        }
        Err(e) => println!("\nResult: saturated ({}) after {} steps", e, model.step_count()),
    }
}
