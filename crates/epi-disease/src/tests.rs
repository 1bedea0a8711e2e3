//! Unit tests for epi-disease.

use epi_core::{EpidemicConfig, Position, SimRng, Stage, TransitionKind, TransitionParams};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Every transition takes exactly `ticks` (zero spread).
fn fixed_params(ticks: f64) -> [TransitionParams; TransitionKind::COUNT] {
    [TransitionParams::fixed(ticks); TransitionKind::COUNT]
}

/// Config with progression effectively frozen so only contagion acts.
fn frozen_config(n: usize, probability: f64, radius: f64) -> EpidemicConfig {
    EpidemicConfig {
        population_size:          n,
        initial_infected:         0,
        contagion_radius:         radius,
        transmission_probability: probability,
        movement_scale:           0.0,
        domain_size:              20.0,
        transitions:              fixed_params(1e9),
        seed:                     Some(1),
    }
}

// ── AgentMask ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent_mask {
    use epi_core::AgentId;

    use crate::AgentMask;

    #[test]
    fn insert_remove_count() {
        let mut m = AgentMask::new(4);
        assert!(m.is_empty());
        assert!(m.insert(AgentId(2)));
        assert!(!m.insert(AgentId(2)), "second insert is a no-op");
        assert!(m.contains(AgentId(2)));
        assert_eq!(m.count(), 1);
        assert!(m.remove(AgentId(2)));
        assert!(!m.remove(AgentId(2)));
        assert_eq!(m.count(), 0);
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn iter_is_ascending() {
        let m = AgentMask::from_fn(6, |i| i % 2 == 1);
        let ids: Vec<AgentId> = m.iter().collect();
        assert_eq!(ids, vec![AgentId(1), AgentId(3), AgentId(5)]);
        assert_eq!(m.count(), 3);
    }

    #[test]
    fn clear_empties() {
        let mut m = AgentMask::from_fn(3, |_| true);
        m.clear();
        assert!(m.is_empty());
        assert!(m.as_slice().iter().all(|b| !b));
    }
}

// ── StageTransitionModel ──────────────────────────────────────────────────────

#[cfg(test)]
mod transition {
    use epi_core::AgentId;

    use super::*;
    use crate::{DiseaseError, StageTransitionModel};

    #[test]
    fn zero_std_samples_the_mean() {
        let params = [
            TransitionParams::fixed(1.0),
            TransitionParams::fixed(2.0),
            TransitionParams::fixed(3.0),
            TransitionParams::fixed(4.0),
        ];
        let model = StageTransitionModel::new(&params, 3, &mut SimRng::new(0)).unwrap();
        for row in &model.thresholds {
            assert_eq!(*row, [1.0, 2.0, 3.0, 4.0]);
        }
    }

    #[test]
    fn negative_std_is_rejected() {
        let mut params = fixed_params(5.0);
        params[2] = TransitionParams::new(5.0, -1.0);
        let result = StageTransitionModel::new(&params, 2, &mut SimRng::new(0));
        assert!(matches!(
            result,
            Err(DiseaseError::InvalidParams { kind: TransitionKind::DiagnosedToImmobilized, .. })
        ));
    }

    #[test]
    fn non_finite_params_are_rejected() {
        let mut params = fixed_params(5.0);
        params[0] = TransitionParams::new(f64::NAN, 1.0);
        assert!(matches!(
            StageTransitionModel::new(&params, 2, &mut SimRng::new(0)),
            Err(DiseaseError::InvalidParams { kind: TransitionKind::InfectedToContagious, .. })
        ));

        params[0] = TransitionParams::new(5.0, f64::INFINITY);
        assert!(matches!(
            StageTransitionModel::new(&params, 2, &mut SimRng::new(0)),
            Err(DiseaseError::InvalidParams { kind: TransitionKind::InfectedToContagious, .. })
        ));
    }

    #[test]
    fn uninfected_and_recovered_never_advance() {
        let mut model = StageTransitionModel::new(&fixed_params(-5.0), 2, &mut SimRng::new(0)).unwrap();
        let mut stages = vec![Stage::NotInfected, Stage::Recovered];
        for _ in 0..50 {
            stages = model.advance(&stages).unwrap();
        }
        assert_eq!(stages, vec![Stage::NotInfected, Stage::Recovered]);
        assert_eq!(model.elapsed_ticks(AgentId(0)), 50);
    }

    #[test]
    fn advances_one_stage_per_tick_even_past_threshold() {
        let mut model = StageTransitionModel::new(&fixed_params(-100.0), 1, &mut SimRng::new(0)).unwrap();
        let mut stages = vec![Stage::Infected];
        let expected = [
            Stage::Contagious,
            Stage::Diagnosed,
            Stage::Immobilized,
            Stage::Recovered,
            Stage::Recovered,
        ];
        for want in expected {
            stages = model.advance(&stages).unwrap();
            assert_eq!(stages[0], want);
        }
    }

    #[test]
    fn counter_resets_on_change_and_increments_otherwise() {
        let mut model = StageTransitionModel::new(&fixed_params(2.0), 1, &mut SimRng::new(0)).unwrap();
        let mut stages = vec![Stage::Infected];
        // elapsed 0,1,2 are not > 2; the fourth advance sees 3 > 2.
        for expected_elapsed in 1..=3 {
            stages = model.advance(&stages).unwrap();
            assert_eq!(stages[0], Stage::Infected);
            assert_eq!(model.elapsed_ticks(AgentId(0)), expected_elapsed);
        }
        stages = model.advance(&stages).unwrap();
        assert_eq!(stages[0], Stage::Contagious);
        assert_eq!(model.elapsed_ticks(AgentId(0)), 0);
    }

    #[test]
    fn single_agent_zero_dwell_reaches_contagious_on_second_tick() {
        let mut model = StageTransitionModel::new(&fixed_params(0.0), 1, &mut SimRng::new(0)).unwrap();
        let stages = model.advance(&[Stage::Infected]).unwrap();
        assert_eq!(stages[0], Stage::Infected);
        assert_eq!(model.elapsed_ticks(AgentId(0)), 1);
        let stages = model.advance(&stages).unwrap();
        assert_eq!(stages[0], Stage::Contagious);
    }

    #[test]
    fn reset_counter_holds_agent_for_the_tick() {
        let mut model = StageTransitionModel::new(&fixed_params(-1.0), 2, &mut SimRng::new(0)).unwrap();
        model.reset_counter(&[AgentId(0)]);
        let stages = model.advance(&[Stage::Infected, Stage::Infected]).unwrap();
        assert_eq!(stages, vec![Stage::Infected, Stage::Contagious]);
        assert_eq!(model.elapsed_ticks(AgentId(0)), 0);

        // Next tick the hold is gone.
        let stages = model.advance(&stages).unwrap();
        assert_eq!(stages[0], Stage::Contagious);
    }

    #[test]
    fn length_mismatch_errors() {
        let mut model = StageTransitionModel::new(&fixed_params(1.0), 3, &mut SimRng::new(0)).unwrap();
        let result = model.advance(&[Stage::Infected]);
        assert!(matches!(
            result,
            Err(DiseaseError::AgentCountMismatch { expected: 3, got: 1, .. })
        ));
    }
}

// ── ContagionModel ────────────────────────────────────────────────────────────

#[cfg(test)]
mod contagion {
    use epi_core::AgentId;

    use super::*;
    use crate::{ContagionModel, DiseaseError};

    fn model(config: &EpidemicConfig, stages: Vec<Stage>) -> (ContagionModel, SimRng) {
        let mut rng = SimRng::new(7);
        let m = ContagionModel::new(config, stages, &mut rng).unwrap();
        (m, rng)
    }

    #[test]
    fn contact_inside_radius_infects_with_certainty() {
        let cfg = frozen_config(2, 1.0, 1.0);
        let (mut m, mut rng) = model(&cfg, vec![Stage::Infected, Stage::NotInfected]);
        // distance² = 0.9999² < 1
        let positions = [Position::ORIGIN, Position::new(0.9999, 0.0)];
        let stages = m.step(&positions, &mut rng).unwrap();
        assert_eq!(stages[1], Stage::Infected);
        assert_eq!(m.transitions().elapsed_ticks(AgentId(1)), 0);
        assert!(m.infectious().contains(AgentId(1)));
    }

    #[test]
    fn contact_outside_radius_never_infects() {
        let cfg = frozen_config(2, 1.0, 1.0);
        let (mut m, mut rng) = model(&cfg, vec![Stage::Infected, Stage::NotInfected]);
        // distance² = 1.0001² > 1
        let positions = [Position::ORIGIN, Position::new(1.0001, 0.0)];
        for _ in 0..100 {
            let stages = m.step(&positions, &mut rng).unwrap();
            assert_eq!(stages[1], Stage::NotInfected);
        }
    }

    #[test]
    fn exactly_on_radius_is_not_a_contact() {
        let cfg = frozen_config(2, 1.0, 1.0);
        let (mut m, mut rng) = model(&cfg, vec![Stage::Infected, Stage::NotInfected]);
        let positions = [Position::ORIGIN, Position::new(1.0, 0.0)];
        let stages = m.step(&positions, &mut rng).unwrap();
        assert_eq!(stages[1], Stage::NotInfected);
    }

    #[test]
    fn zero_probability_never_infects() {
        let cfg = frozen_config(2, 0.0, 1.0);
        let (mut m, mut rng) = model(&cfg, vec![Stage::Infected, Stage::NotInfected]);
        let positions = [Position::ORIGIN; 2];
        for _ in 0..100 {
            assert_eq!(m.step(&positions, &mut rng).unwrap()[1], Stage::NotInfected);
        }
    }

    #[test]
    fn recovered_is_immune_and_does_not_transmit() {
        let cfg = frozen_config(3, 1.0, 1.0);
        let (mut m, mut rng) = model(
            &cfg,
            vec![Stage::Infected, Stage::Recovered, Stage::NotInfected],
        );
        // Agent 1 (recovered) shares a spot with agent 0; agent 2 is only
        // near agent 1.
        let positions = [Position::ORIGIN, Position::ORIGIN, Position::new(1.5, 0.0)];
        for _ in 0..20 {
            let stages = m.step(&positions, &mut rng).unwrap();
            assert_eq!(stages[1], Stage::Recovered);
            assert_eq!(stages[2], Stage::NotInfected);
        }
        assert!(m.recovered().contains(AgentId(1)));
        assert!(!m.infectious().contains(AgentId(1)));
    }

    #[test]
    fn agent_recovering_leaves_infectious_set_same_tick() {
        let mut cfg = frozen_config(1, 1.0, 1.0);
        cfg.transitions = fixed_params(-1.0);
        let (mut m, mut rng) = model(&cfg, vec![Stage::Immobilized]);
        let stages = m.step(&[Position::ORIGIN], &mut rng).unwrap();
        assert_eq!(stages[0], Stage::Recovered);
        assert!(m.recovered().contains(AgentId(0)));
        assert!(m.infectious().is_empty());
    }

    #[test]
    fn no_infectious_agents_is_quiet() {
        let cfg = frozen_config(4, 1.0, 5.0);
        let (mut m, mut rng) = model(&cfg, vec![Stage::NotInfected; 4]);
        let positions = [Position::ORIGIN; 4];
        let stages = m.step(&positions, &mut rng).unwrap();
        assert!(stages.iter().all(|&s| s == Stage::NotInfected));
    }

    #[test]
    fn newly_infected_do_not_advance_in_the_same_tick() {
        let mut cfg = frozen_config(2, 1.0, 1.0);
        cfg.transitions = fixed_params(-10.0);
        let (mut m, mut rng) = model(&cfg, vec![Stage::Infected, Stage::NotInfected]);
        let stages = m.step(&[Position::ORIGIN; 2], &mut rng).unwrap();
        assert_eq!(stages[1], Stage::Infected, "0 → 1 only, no skip to 2");
        assert_eq!(stages[0], Stage::Contagious);
    }

    #[test]
    fn stages_never_regress_or_skip() {
        let cfg = EpidemicConfig {
            population_size:          60,
            initial_infected:         0,
            contagion_radius:         2.0,
            transmission_probability: 0.3,
            movement_scale:           0.0,
            domain_size:              10.0,
            transitions:              [TransitionParams::new(3.0, 2.0); TransitionKind::COUNT],
            seed:                     Some(3),
        };
        let mut rng = SimRng::new(11);
        let mut stages = vec![Stage::NotInfected; 60];
        stages[0] = Stage::Infected;
        stages[30] = Stage::Infected;
        let positions: Vec<Position> = (0..60)
            .map(|i| Position::new((i % 10) as f64, (i / 10) as f64))
            .collect();
        let mut m = ContagionModel::new(&cfg, stages.clone(), &mut rng).unwrap();

        for _ in 0..200 {
            let next = m.step(&positions, &mut rng).unwrap();
            assert_eq!(next.len(), 60);
            for (before, after) in stages.iter().zip(&next) {
                assert!(after >= before, "stage regressed: {before} -> {after}");
                assert!(after.code() - before.code() <= 1, "stage skipped: {before} -> {after}");
            }
            stages = next;
        }
    }

    #[test]
    fn positions_length_mismatch_errors() {
        let cfg = frozen_config(3, 0.5, 1.0);
        let (mut m, mut rng) = model(&cfg, vec![Stage::NotInfected; 3]);
        let result = m.step(&[Position::ORIGIN], &mut rng);
        assert!(matches!(result, Err(DiseaseError::AgentCountMismatch { what: "positions", .. })));
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let cfg = EpidemicConfig { transmission_probability: 2.0, ..frozen_config(2, 0.0, 1.0) };
        let result = ContagionModel::new(&cfg, vec![Stage::NotInfected; 2], &mut SimRng::new(0));
        assert!(matches!(result, Err(DiseaseError::Core(_))));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_pair_search_matches_sequential_scan() {
        use crate::contagion::contacts_within;

        let n = 120;
        let stages: Vec<Stage> = (0..n)
            .map(|i| match i % 5 {
                0 => Stage::Infected,
                1 => Stage::Diagnosed,
                2 => Stage::Recovered,
                _ => Stage::NotInfected,
            })
            .collect();
        let positions: Vec<Position> = (0..n)
            .map(|i| Position::new((i % 12) as f64 * 0.7, (i / 12) as f64 * 0.7))
            .collect();
        let cfg = frozen_config(n, 0.5, 1.5);
        let (m, _) = model(&cfg, stages.clone());

        let expected: Vec<Vec<AgentId>> = m
            .infectious()
            .iter()
            .map(|a| contacts_within(a, &positions, &stages, cfg.radius_sq()))
            .collect();
        assert_eq!(expected.len(), 48);
        assert!(expected.iter().any(|row| !row.is_empty()));
        assert_eq!(m.at_risk_pairs(&positions), expected);
    }

    #[test]
    fn initial_stage_count_mismatch_rejected() {
        let cfg = frozen_config(3, 0.5, 1.0);
        let result = ContagionModel::new(&cfg, vec![Stage::NotInfected; 2], &mut SimRng::new(0));
        assert!(matches!(result, Err(DiseaseError::AgentCountMismatch { .. })));
    }
}
