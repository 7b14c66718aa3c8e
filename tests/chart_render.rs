use covid_stats::chart::{Bar, BarChart, ChartError};

fn december() -> Vec<Bar> {
    vec![
        Bar::new("25th Dec", 10),
        Bar::new("26th Dec", 25),
        Bar::new("27th Dec", 50),
        Bar::new("28th Dec", 30),
        Bar::new("29th Dec", 1),
    ]
}

#[test]
fn empty_chart_is_rejected() {
    let err = BarChart::new("title", Vec::new()).unwrap_err();
    assert_eq!(err, ChartError::EmptyChart);
    assert_eq!(err.to_string(), "there are no bars in the bar chart");
}

#[test]
fn chart_keeps_title_and_bar_order() {
    let chart = BarChart::new("Ordered", december()).unwrap();
    assert_eq!(chart.title(), "Ordered");
    let counts: Vec<u64> = chart.bars().iter().map(Bar::count).collect();
    assert_eq!(counts, vec![10, 25, 50, 30, 1]);
}

#[test]
fn plots_multiple_bars_at_half_scale() {
    let chart = BarChart::new("Data about something or other", december()).unwrap();

    let expected = "\n----- Data about something or other -----\n\n".to_string()
        + "25th  (10) | *****                      \n"
        + "26th  (25) | ************               \n"
        + "27th  (50) | *************************  \n"
        + "28th  (30) | ***************            \n"
        + "29th  (1)  |                            \n\n";

    assert_eq!(chart.plot(0.5), expected);
}

#[test]
fn plots_multiple_bars_at_full_scale() {
    let chart = BarChart::new("Data about something or other", december()).unwrap();

    let expected = "\n----- Data about something or other -----\n\n".to_string()
        + "25th  (10) | **********                                          \n"
        + "26th  (25) | *************************                           \n"
        + "27th  (50) | **************************************************  \n"
        + "28th  (30) | ******************************                      \n"
        + "29th  (1)  | *                                                   \n\n";

    assert_eq!(chart.plot(1.0), expected);
}

#[test]
fn plots_a_single_bar() {
    let bars = vec![Bar::new("1st Jan", 100)];
    let chart = BarChart::new("Data about something or other", bars).unwrap();

    let expected = format!(
        "\n----- Data about something or other -----\n\n1st J (100) | {}  \n\n",
        "*".repeat(100)
    );

    assert_eq!(chart.plot(1.0), expected);
}

#[test]
fn plotting_is_deterministic() {
    let chart = BarChart::new("Again", december()).unwrap();
    assert_eq!(chart.plot(0.25), chart.plot(0.25));
    assert_eq!(chart.lines(0.25), chart.lines(0.25));
}

#[test]
fn all_zero_counts_render_empty_bars() {
    let chart = BarChart::new("Quiet", vec![Bar::new("a", 0), Bar::new("b", 0)]).unwrap();
    let out = chart.plot(1.0);
    assert!(!out.contains('*'));
    // x axis is one column, plus the trailing column.
    assert!(out.contains("  a   (0) |   \n"));
}

#[test]
fn plot_to_width_fits_the_tallest_bar() {
    let chart = BarChart::new("Big", vec![Bar::new("x", 1000), Bar::new("y", 250)]).unwrap();
    let out = chart.plot_to_width(100.0);
    let tallest = out
        .lines()
        .map(|l| l.chars().filter(|c| *c == '*').count())
        .max()
        .unwrap();
    // 1000 / 16 = 62.5 -> 62 columns
    assert_eq!(tallest, 62);
    assert!(out.contains("  y   (250)  | ***************  "));
}
