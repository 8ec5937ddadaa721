use digestica_core::models::band::{Band, Likelihood};
use digestica_core::models::condition::Condition;
use digestica_core::models::result::Interpretation;
use digestica_core::models::score::ScoreVector;
use digestica_instruments::classify::{classify, condition_levels, interpret_conditions, top_condition};

#[test]
fn bands_are_relative_to_the_cutoff() {
    assert_eq!(classify(70.0, 70.0), Band::High);
    assert_eq!(classify(99.0, 70.0), Band::High);
    assert_eq!(classify(42.0, 70.0), Band::Moderate);
    assert_eq!(classify(69.0, 70.0), Band::Moderate);
    assert_eq!(classify(41.0, 70.0), Band::Low);
    assert_eq!(classify(0.0, 6.5), Band::Low);
    assert_eq!(classify(4.0, 6.5), Band::Moderate);
}

#[test]
fn top_condition_prefers_earlier_condition_on_ties() {
    let scores = ScoreVector::default()
        .with(Condition::Lactose, 40)
        .with(Condition::Sibo, 40)
        .with(Condition::Gastritis, 12);
    assert_eq!(top_condition(&scores), Condition::Sibo);

    let scores = ScoreVector::default()
        .with(Condition::Dyspepsia, 6)
        .with(Condition::Gastritis, 6);
    assert_eq!(top_condition(&scores), Condition::Dyspepsia);
}

#[test]
fn all_zero_scores_point_at_first_condition() {
    assert_eq!(top_condition(&ScoreVector::default()), Condition::Ibs);
}

#[test]
fn strictly_higher_score_wins() {
    let scores = ScoreVector::default()
        .with(Condition::Ibs, 30)
        .with(Condition::Ibd, 31);
    assert_eq!(top_condition(&scores), Condition::Ibd);
}

#[test]
fn levels_cover_every_condition_in_order() {
    let scores = ScoreVector::default()
        .with(Condition::Ibs, 72)
        .with(Condition::Sibo, 50)
        .with(Condition::Celiac, 30)
        .with(Condition::Lactose, 29);
    let levels = condition_levels(&scores);

    let conditions: Vec<Condition> = levels.iter().map(|l| l.condition).collect();
    assert_eq!(conditions, Condition::ALL.to_vec());

    let likelihoods: Vec<Likelihood> = levels.iter().take(4).map(|l| l.likelihood).collect();
    assert_eq!(
        likelihoods,
        vec![
            Likelihood::Hoog,
            Likelihood::MatigHoog,
            Likelihood::Matig,
            Likelihood::Laag
        ]
    );
}

#[test]
fn general_interpretation_names_the_top_condition() {
    let scores = ScoreVector::default().with(Condition::Celiac, 55);
    match interpret_conditions(&scores) {
        Interpretation::General {
            top_condition,
            levels,
        } => {
            assert_eq!(top_condition, Condition::Celiac);
            assert_eq!(levels.len(), 7);
        }
        other => panic!("expected general interpretation, got {other:?}"),
    }
}
