use roadmap_layout::{
    FixedTextMeasurer, Primitive, RecordingRenderer, Roadmap, RoadmapOptions, TimelineMode,
};

fn base_roadmap() -> Roadmap {
    let mut rm = Roadmap::new(1200.0, RoadmapOptions::default());
    rm.set_title("Product Roadmap", Default::default()).unwrap();
    rm
}

#[test]
fn monthly_span_splits_into_two_abutting_segments() {
    let mut rm = base_roadmap();
    rm.set_timeline(TimelineMode::Month, "2023-01-01", 3, Default::default())
        .unwrap();
    rm.set_today("2022-01-01").unwrap();
    let group = rm.add_group("Stream", Default::default());
    rm.add_task(group, "Kickoff", "2023-01-15", "2023-02-15", Default::default())
        .unwrap();

    let layout = rm.layout(&FixedTextMeasurer::default()).unwrap();
    assert_eq!(layout.timeline.periods.len(), 3);
    assert_eq!(layout.timeline.periods[0].label, "Jan");
    assert_eq!(layout.timeline.periods[2].label, "Mar");

    let task = &layout.groups[0].tasks[0];
    assert_eq!(task.boxes.len(), 2);

    let jan = &layout.timeline.periods[0].rect;
    let feb = &layout.timeline.periods[1].rect;
    let pct_start = 15.0 / 31.0;
    let pct_end = 15.0 / 28.0;
    assert!((task.boxes[0].x - (jan.x + jan.width * pct_start)).abs() < 1e-3);
    assert!((task.boxes[0].width - (jan.width * (1.0 - pct_start) + 1.0)).abs() < 1e-3);
    assert!((task.boxes[1].x - feb.x).abs() < 1e-3);
    assert!((task.boxes[1].width - (feb.width * pct_end + 1.0)).abs() < 1e-3);

    // One anchor centred over the union of both segments.
    let anchor = task.text_anchor.unwrap();
    let union_mid = (task.boxes[0].x + task.boxes[1].x + task.boxes[1].width) / 2.0;
    let text_width = "Kickoff".len() as f32 * 12.0 * 0.56;
    assert!((anchor.x + text_width / 2.0 - union_mid).abs() < 1e-3);
}

#[test]
fn quarterly_milestone_lands_a_third_into_q1() {
    let mut rm = base_roadmap();
    rm.set_timeline(TimelineMode::Quarter, "2023-01-01", 2, Default::default())
        .unwrap();
    rm.set_today("2022-01-01").unwrap();
    let group = rm.add_group("Stream", Default::default());
    let task = rm
        .add_task(group, "t", "2023-01-01", "2023-03-15", Default::default())
        .unwrap();
    rm.add_milestone(&task, "beta", "2023-02-10", Default::default())
        .unwrap();

    let layout = rm.layout(&FixedTextMeasurer::default()).unwrap();
    let q1 = &layout.timeline.periods[0].rect;
    let diamond = &layout.groups[0].tasks[0].milestones[0].diamond;
    let centre_x = diamond.x + diamond.width / 2.0;
    assert!((centre_x - (q1.x + q1.width / 3.0)).abs() < 1e-3);
}

#[test]
fn marker_appears_only_when_today_is_covered() {
    let mut rm = base_roadmap();
    rm.set_timeline(TimelineMode::Month, "2023-01-01", 12, Default::default())
        .unwrap();
    rm.set_footer("generated by roadmap-layout", Default::default())
        .unwrap();
    rm.set_today("2023-06-15").unwrap();

    let layout = rm.layout(&FixedTextMeasurer::default()).unwrap();
    let (first_day, last_day) = layout.timeline.covered_range().unwrap();
    let today = chrono::NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
    assert!(first_day <= today && today <= last_day);
    let marker = layout.marker.as_ref().expect("today is in range");
    let june = &layout.timeline.periods[5].rect;
    assert!((marker.line_from.x - (june.x + june.width * 15.0 / 30.0)).abs() < 1e-3);
    assert_eq!(marker.line_from.x, marker.line_to.x);
    // Line ends above the footer.
    let footer = layout.footer.as_ref().unwrap();
    assert!(marker.line_to.y < footer.anchor.y);
    assert!(marker.line_to.y > layout.timeline.top);

    rm.set_today("2024-01-01").unwrap();
    let layout = rm.layout(&FixedTextMeasurer::default()).unwrap();
    assert!(layout.marker.is_none());
}

#[test]
fn out_of_window_task_is_invisible_but_not_an_error() {
    let mut rm = base_roadmap();
    rm.set_timeline(TimelineMode::Month, "2023-01-01", 12, Default::default())
        .unwrap();
    rm.set_today("2023-06-15").unwrap();
    let group = rm.add_group("Stream", Default::default());
    rm.add_task(group, "ancient", "2022-01-01", "2022-02-01", Default::default())
        .unwrap();

    let mut renderer = RecordingRenderer::new();
    let layout = rm
        .draw(&FixedTextMeasurer::default(), &mut renderer)
        .unwrap();
    let task = &layout.groups[0].tasks[0];
    assert!(task.boxes.is_empty());
    assert!(task.text_anchor.is_none());
    assert!(
        !renderer
            .ops
            .iter()
            .any(|op| matches!(op, Primitive::Text { text, .. } if text == "ancient"))
    );
}

#[test]
fn layout_is_idempotent_for_a_frozen_today() {
    let mut rm = base_roadmap();
    rm.set_subtitle("H1 targets", Default::default()).unwrap();
    rm.set_timeline(TimelineMode::Month, "2023-01-01", 6, Default::default())
        .unwrap();
    rm.set_today("2023-03-10").unwrap();
    let group = rm.add_group("Stream", Default::default());
    let task = rm
        .add_task(group, "t", "2023-01-10", "2023-04-20", Default::default())
        .unwrap();
    rm.add_milestone(&task, "m", "2023-02-14", Default::default())
        .unwrap();

    let measurer = FixedTextMeasurer::default();
    let mut first = RecordingRenderer::new();
    let mut second = RecordingRenderer::new();
    rm.draw(&measurer, &mut first).unwrap();
    rm.draw(&measurer, &mut second).unwrap();
    assert_eq!(first.ops, second.ops);
}

#[test]
fn year_headers_cover_their_periods_and_yearly_mode_has_none() {
    let mut rm = base_roadmap();
    rm.set_timeline(TimelineMode::Quarter, "2023-07-01", 4, Default::default())
        .unwrap();
    rm.set_today("2020-01-01").unwrap();
    let layout = rm.layout(&FixedTextMeasurer::default()).unwrap();
    // Q3 2023 .. Q2 2024 -> two headers of two quarters each.
    assert_eq!(layout.timeline.year_headers.len(), 2);
    let h23 = &layout.timeline.year_headers[0];
    assert_eq!(h23.label, "2023");
    assert!((h23.rect.right() - layout.timeline.periods[1].rect.right()).abs() < 1e-3);

    rm.set_timeline(TimelineMode::Year, "2023-01-01", 3, Default::default())
        .unwrap();
    let layout = rm.layout(&FixedTextMeasurer::default()).unwrap();
    assert!(layout.timeline.year_headers.is_empty());
    assert_eq!(layout.timeline.periods[0].label, "2023");
}

#[test]
fn auto_height_tracks_content() {
    let measurer = FixedTextMeasurer::default();
    let mut rm = base_roadmap();
    rm.set_timeline(TimelineMode::Month, "2023-01-01", 6, Default::default())
        .unwrap();
    rm.set_today("2020-01-01").unwrap();
    let short = rm.layout(&measurer).unwrap();

    let group = rm.add_group("Stream", Default::default());
    for i in 0..4 {
        rm.add_task(
            group,
            &format!("task {i}"),
            "2023-01-01",
            "2023-02-01",
            Default::default(),
        )
        .unwrap();
    }
    let tall = rm.layout(&measurer).unwrap();
    assert!(tall.height > short.height);

    // Fixed-height surfaces ignore content.
    let mut fixed = Roadmap::new(
        1200.0,
        RoadmapOptions {
            auto_height: false,
            height: 640.0,
            ..Default::default()
        },
    );
    fixed.set_title("t", Default::default()).unwrap();
    fixed
        .set_timeline(TimelineMode::Month, "2023-01-01", 6, Default::default())
        .unwrap();
    fixed.set_today("2020-01-01").unwrap();
    assert_eq!(fixed.layout(&measurer).unwrap().height, 640.0);
}

#[test]
fn draw_emits_primitives_in_paint_order() {
    let mut rm = base_roadmap();
    rm.set_timeline(TimelineMode::Month, "2023-01-01", 3, Default::default())
        .unwrap();
    rm.set_today("2023-02-01").unwrap();
    rm.set_footer("footer", Default::default()).unwrap();
    let group = rm.add_group("Stream", Default::default());
    rm.add_task(group, "t", "2023-01-05", "2023-02-20", Default::default())
        .unwrap();

    let mut renderer = RecordingRenderer::new();
    let layout = rm
        .draw(&FixedTextMeasurer::default(), &mut renderer)
        .unwrap();

    // Background first, covering the whole surface, then the title before
    // any timeline cell.
    let background = renderer.rects().next().unwrap();
    assert_eq!(background, &renderer.ops[0]);
    assert!(matches!(
        background,
        Primitive::Rect { rect, .. } if rect.x == 0.0 && rect.width == layout.width
    ));
    let title_idx = renderer
        .ops
        .iter()
        .position(|op| matches!(op, Primitive::Text { text, .. } if text == "Product Roadmap"))
        .unwrap();
    let first_period_idx = renderer
        .ops
        .iter()
        .position(|op| matches!(op, Primitive::Text { text, .. } if text == "Jan"))
        .unwrap();
    let line_idx = renderer
        .ops
        .iter()
        .position(|op| matches!(op, Primitive::Line { .. }))
        .unwrap();
    let footer_idx = renderer
        .ops
        .iter()
        .position(|op| matches!(op, Primitive::Text { text, .. } if text == "footer"))
        .unwrap();
    assert!(title_idx < first_period_idx);
    assert!(first_period_idx < line_idx);
    assert!(line_idx < footer_idx);
}

#[test]
fn generic_labels_number_the_cells() {
    let mut rm = base_roadmap();
    rm.set_timeline(
        TimelineMode::Week,
        "2023-01-04",
        4,
        roadmap_layout::TimelineOptions {
            generic_labels: true,
            ..Default::default()
        },
    )
    .unwrap();
    rm.set_today("2020-01-01").unwrap();
    let layout = rm.layout(&FixedTextMeasurer::default()).unwrap();
    assert_eq!(layout.timeline.periods[0].label, "Week 1");
    assert_eq!(layout.timeline.periods[3].label, "Week 4");
    // Real date bounds are kept for positioning even with generic labels.
    assert!(layout.timeline.periods[0].start < layout.timeline.periods[0].end);
}
