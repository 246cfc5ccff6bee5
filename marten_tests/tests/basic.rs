use marten_sat::reports::Report;

mod verdicts {
    use marten_tests::{report_of, solved_context};

    use super::*;

    #[test]
    fn a_single_unit_is_satisfiable() {
        let ctx = solved_context("p cnf 1 1\n1 0\n");

        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.model(), Some(vec![true]));
    }

    #[test]
    fn complementary_units_are_unsatisfiable() {
        assert_eq!(report_of("p cnf 1 2\n1 0\n-1 0\n"), Report::Unsatisfiable);
    }

    #[test]
    fn a_unit_chain_propagates_to_a_model() {
        let ctx = solved_context("p cnf 3 3\n1 0\n-1 2 0\n-2 3 0\n");

        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.model(), Some(vec![true, true, true]));
    }

    #[test]
    fn two_pigeons_do_not_fit_one_hole() {
        assert_eq!(report_of("p cnf 2 3\n1 0\n2 0\n-1 -2 0\n"), Report::Unsatisfiable);
    }

    #[test]
    fn an_empty_formula_is_satisfiable() {
        assert_eq!(report_of("p cnf 0 0\n"), Report::Satisfiable);
    }

    #[test]
    fn an_atom_outside_every_clause_is_reported() {
        // The header promises three atoms, the clauses mention two.
        let ctx = solved_context("p cnf 3 1\n1 2 0\n");

        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.model().map(|model| model.len()), Some(3));
    }
}

mod chains {
    use marten_sat::reports::Report;
    use marten_tests::{clauses_of, evaluate, solved_context};

    #[test]
    fn long_chains_settle_by_propagation_alone() {
        for length in [2, 10, 100, 500] {
            let dimacs = marten_tests::chain(length);
            let ctx = solved_context(&dimacs);

            assert_eq!(ctx.report(), Report::Satisfiable);
            assert_eq!(ctx.counters.total_decisions, 0);
            assert_eq!(ctx.counters.total_propagations, length);

            let model = ctx.model().expect("no model");
            assert!(evaluate(&clauses_of(&dimacs), &model));
        }
    }
}

mod determinism {
    use marten_tests::{solved_context, uniform_random_3sat};

    #[test]
    fn identical_runs_identical_solves() {
        let dimacs = uniform_random_3sat(20, 85, 3);

        let first = solved_context(&dimacs);
        let second = solved_context(&dimacs);

        assert_eq!(first.report(), second.report());
        assert_eq!(first.valuation(), second.valuation());
        assert_eq!(first.counters, second.counters);
    }
}
