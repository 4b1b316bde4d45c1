//! Tests for running both solvers and tallying their agreement

#[cfg(test)]
mod tests {
    use polypack::algorithm::budget::{SearchBudget, SearchOutcome, Verdict};
    use polypack::algorithm::cache::CacheStats;
    use polypack::algorithm::executor::{
        Agreement, Orchestrator, OrchestratorConfig, RegionReport, SolverRun, Summary,
    };
    use polypack::spatial::region::Region;
    use polypack::spatial::shape::Shape;
    use std::time::Duration;

    fn run(verdict: Verdict) -> Option<SolverRun> {
        Some(SolverRun {
            outcome: SearchOutcome::immediate(verdict),
            elapsed: Duration::ZERO,
        })
    }

    fn report(bitmask: Option<SolverRun>, exact_cover: Option<SolverRun>) -> RegionReport {
        RegionReport {
            bitmask,
            exact_cover,
        }
    }

    fn squares() -> Vec<Shape> {
        vec![Shape::from_rows(0, &["##", "##"]).expect("valid shape")]
    }

    #[test]
    fn test_agreement_classification() {
        assert_eq!(
            report(run(Verdict::Fits), run(Verdict::Fits)).agreement(),
            Agreement::Fits
        );
        assert_eq!(
            report(run(Verdict::DoesNotFit), run(Verdict::DoesNotFit)).agreement(),
            Agreement::DoesNotFit
        );
        assert_eq!(
            report(run(Verdict::Fits), run(Verdict::DoesNotFit)).agreement(),
            Agreement::Mismatch {
                bitmask: true,
                exact_cover: false,
            }
        );
        assert_eq!(report(None, None).agreement(), Agreement::Inconclusive);
    }

    // A solver that gave up defers to the one that finished
    #[test]
    fn test_exhausted_solver_is_not_a_mismatch() {
        assert_eq!(
            report(run(Verdict::Exhausted), run(Verdict::DoesNotFit)).agreement(),
            Agreement::DoesNotFit
        );
        assert_eq!(
            report(run(Verdict::Fits), run(Verdict::Exhausted)).agreement(),
            Agreement::Fits
        );
        assert_eq!(
            report(run(Verdict::Exhausted), run(Verdict::Exhausted)).agreement(),
            Agreement::Inconclusive
        );
    }

    #[test]
    fn test_summary_records_first_mismatch() {
        let mut summary = Summary::default();
        summary.record(&report(run(Verdict::Fits), run(Verdict::Fits)));
        summary.record(&report(run(Verdict::DoesNotFit), run(Verdict::Fits)));
        summary.record(&report(run(Verdict::Fits), run(Verdict::DoesNotFit)));
        summary.record(&report(run(Verdict::Exhausted), None));

        assert_eq!(summary.regions, 4);
        assert_eq!(summary.bitmask_fits, 2);
        assert_eq!(summary.exact_cover_fits, 2);
        assert_eq!(summary.mismatches, 2);
        assert_eq!(summary.first_mismatch, Some(2));
        assert_eq!(summary.inconclusive, 1);
    }

    #[test]
    fn test_orchestrator_runs_both_solvers() {
        let mut orchestrator = Orchestrator::new(squares(), OrchestratorConfig::default());

        let fits = orchestrator.evaluate(&Region::new(2, 2, vec![1]));
        assert_eq!(fits.agreement(), Agreement::Fits);
        assert!(fits.bitmask.is_some() && fits.exact_cover.is_some());

        let crowded = orchestrator.evaluate(&Region::new(3, 3, vec![2]));
        assert_eq!(crowded.agreement(), Agreement::DoesNotFit);

        let summary = orchestrator.summary();
        assert_eq!(summary.regions, 2);
        assert_eq!(summary.bitmask_fits, 1);
        assert_eq!(summary.exact_cover_fits, 1);
        assert_eq!(summary.first_mismatch, None);
        assert_eq!(orchestrator.shapes().len(), 1);
    }

    // The second solver reuses the list the first one enumerated
    #[test]
    fn test_cache_shared_between_solvers() {
        let mut orchestrator = Orchestrator::new(squares(), OrchestratorConfig::default());
        orchestrator.evaluate(&Region::new(2, 2, vec![1]));
        assert_eq!(orchestrator.cache_stats(), CacheStats { hits: 1, misses: 1 });

        orchestrator.evaluate(&Region::new(2, 2, vec![1]));
        assert_eq!(orchestrator.cache_stats(), CacheStats { hits: 3, misses: 1 });
    }

    #[test]
    fn test_single_solver_config() {
        let config = OrchestratorConfig {
            run_bitmask: false,
            run_exact_cover: true,
            budget: SearchBudget::UNLIMITED,
        };
        let mut orchestrator = Orchestrator::new(squares(), config);
        let report = orchestrator.evaluate(&Region::new(2, 2, vec![1]));

        assert!(report.bitmask.is_none());
        assert_eq!(report.exact_cover.map(|run| run.verdict()), Some(Verdict::Fits));
        assert_eq!(orchestrator.summary().bitmask_fits, 0);
        assert_eq!(orchestrator.config(), &config);
    }

    #[test]
    fn test_budget_applies_to_each_solver() {
        let config = OrchestratorConfig {
            budget: SearchBudget::UNLIMITED.with_max_nodes(1),
            ..OrchestratorConfig::default()
        };
        let mut orchestrator = Orchestrator::new(squares(), config);
        let report = orchestrator.evaluate(&Region::new(4, 2, vec![2]));

        assert_eq!(report.agreement(), Agreement::Inconclusive);
        assert_eq!(orchestrator.summary().inconclusive, 1);
    }
}
