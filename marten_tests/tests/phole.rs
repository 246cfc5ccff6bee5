mod phole {
    use marten_sat::reports::Report;
    use marten_tests::{pigeonhole, report_of};

    #[test]
    fn normal() {
        let mut ok_count = 0;
        for holes in 1..=3 {
            assert_eq!(Report::Unsatisfiable, report_of(&pigeonhole(holes)));
            ok_count += 1;
        }
        assert_eq!(ok_count, 3);
    }

    #[test]
    fn tough_four() {
        assert_eq!(Report::Unsatisfiable, report_of(&pigeonhole(4)));
    }

    #[test]
    #[ignore = "expensive"]
    fn tough_five() {
        assert_eq!(Report::Unsatisfiable, report_of(&pigeonhole(5)));
    }
}
