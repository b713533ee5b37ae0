#![cfg(target_arch = "wasm32")]

use trust_gambit_engine::TrustSimulation;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const EXPORT: &str = r#"{
    "game": { "name": "G", "status": "ENDED", "lambda": 0.5, "beta": 0.1, "gamma": 0.2 },
    "users": [ { "id": "u1", "name": "One" }, { "id": "u2", "name": "Two" } ],
    "rounds": [ { "id": "r1", "roundNumber": 1, "stage": 1 } ],
    "submissions": [
        { "roundId": "r1", "userId": "u1", "action": "SOLVE", "isCorrect": true },
        { "roundId": "r1", "userId": "u2", "action": "DELEGATE", "delegateToId": "u1" }
    ]
}"#;

#[wasm_bindgen_test]
fn test_constructor_and_run() {
    let mut sim = TrustSimulation::new(EXPORT, JsValue::UNDEFINED).unwrap();
    let results = sim.run();
    assert!(!results.is_null());
    assert_eq!(sim.round_count(), 1);
    assert!(!sim.leaderboard().is_null());
    assert!(!sim.visualization().is_null());
}

#[wasm_bindgen_test]
fn test_constructor_rejects_bad_json() {
    assert!(TrustSimulation::new("{", JsValue::NULL).is_err());
}
