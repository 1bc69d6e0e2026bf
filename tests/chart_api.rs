use funcplot::charts::SeriesKind;
use funcplot::{Chart, ChartConfig, FunctionPlot, PlotError, Style, TrendLine};
use std::io::Write;

#[test]
fn marker_points_render_exactly_as_given() {
    let mut chart = Chart::new();
    chart
        .plot_points_styled(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0], "p", Style::Marker)
        .unwrap();
    let viewer = chart.into_viewer().unwrap();

    let series = viewer.series();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].points, vec![[0.0, 0.0], [1.0, 1.0], [2.0, 4.0]]);
    assert!(!series[0].appearance.show_line);
}

#[test]
fn mismatched_points_are_rejected_and_never_rendered() {
    let mut chart = Chart::new();
    let err = chart
        .plot_points(vec![1.0, 2.0, 3.0], vec![1.0, 2.0], "bad")
        .unwrap_err();
    assert!(matches!(err, PlotError::InvalidArgument(_)));

    let viewer = chart.into_viewer().unwrap();
    assert!(viewer.series().is_empty());
}

#[test]
fn missing_function_is_a_null_argument() {
    let mut chart = Chart::new();
    let err = chart
        .add_function_plot(FunctionPlot::default().interval(0.0, 1.0).legend("none"))
        .unwrap_err();
    assert!(matches!(err, PlotError::NullArgument(_)));
}

#[test]
fn buffered_plots_replay_functions_first() {
    let mut chart = Chart::new();
    chart
        .plot_function(|x: f64| x, 0.0, 1.0, "first")
        .unwrap();
    chart
        .plot_points_with_trends(vec![0.0, 1.0], vec![1.0, 0.0], "points", [Some(TrendLine::Linear), None])
        .unwrap();
    chart
        .plot_function_styled(|x: f64| -x, 0.0, 1.0, "second", Style::Marker)
        .unwrap();

    let viewer = chart.into_viewer().unwrap();
    let legends: Vec<&str> = viewer.series().iter().map(|s| s.legend.as_str()).collect();
    assert_eq!(legends, vec!["first", "second", "points"]);

    let kinds: Vec<SeriesKind> = viewer.series().iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![SeriesKind::Function, SeriesKind::Function, SeriesKind::Points]
    );
    assert_eq!(
        viewer.series()[2].trend_lines,
        vec![Some(TrendLine::Linear), None]
    );
}

#[test]
fn shorthand_point_plots_carry_one_empty_trend_slot() {
    let mut chart = Chart::new();
    chart.plot_points(vec![0.0, 1.0], vec![0.0, 1.0], "default").unwrap();
    chart
        .plot_points_styled(vec![0.0, 1.0], vec![1.0, 0.0], "styled", Style::Line)
        .unwrap();
    let viewer = chart.into_viewer().unwrap();

    let series = viewer.series();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].trend_lines, vec![None]);
    assert_eq!(series[1].trend_lines, vec![None]);
    assert!(series[0].appearance.show_line && series[0].appearance.show_markers);
    assert!(!series[1].appearance.show_markers);
}

#[test]
fn pole_never_reaches_the_chart() {
    let mut chart = Chart::new();
    chart
        .plot_function(|x: f64| 1.0 / x, -1.0, 1.0, "1/x")
        .unwrap();
    let viewer = chart.into_viewer().unwrap();

    let points = &viewer.series()[0].points;
    assert!(points.len() <= 801);
    assert!(points.iter().all(|&[x, y]| (-1.0..=1.0).contains(&x) && y.is_finite()));
}

#[test]
fn titles_are_kept_in_config() {
    let mut chart = Chart::new();
    chart.set_window_title("Window");
    chart.set_chart_title("Chart");
    chart.set_axis_x_title("time");
    chart.set_axis_y_title("value");

    let viewer = chart.into_viewer().unwrap();
    let config = viewer.config();
    assert_eq!(config.window_title, "Window");
    assert_eq!(config.chart_title.as_deref(), Some("Chart"));
    assert_eq!(config.x_axis_title.as_deref(), Some("time"));
    assert_eq!(config.y_axis_title.as_deref(), Some("value"));
}

#[test]
fn config_file_drives_chart_titles() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "window_title": "Lab", "x_axis_title": "t (s)", "icon": "icon.png" }}"#
    )
    .unwrap();

    let config = ChartConfig::load(file.path()).unwrap();
    let chart = Chart::with_config(config);
    assert_eq!(chart.config().window_title, "Lab");
    assert_eq!(chart.config().x_axis_title.as_deref(), Some("t (s)"));
    assert_eq!(chart.config().chart_title, None);
    assert_eq!(
        chart.config().icon.as_deref(),
        Some(std::path::Path::new("icon.png"))
    );
}
