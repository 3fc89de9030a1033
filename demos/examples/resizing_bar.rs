// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated shell bar swept through a window resize.
//!
//! This example shows how a host wires up `understory_action_bar`:
//! - a `BarSurface` that lays regions out left to right with `kurbo::Rect`,
//! - a `ResizeThrottle` fed with synthetic timestamps,
//! - `ActionBar::run` on each throttled resize and `ActionBar::toggle_search` on a click.
//!
//! Run:
//! - `cargo run -p understory_demos --example resizing_bar`
//! - `RUST_LOG=understory_action_bar=trace cargo run -p understory_demos --example resizing_bar`

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_action_bar::{
    ActionBar, ActionConfig, ActionRole, BarConfig, BarEvent, BarSnapshot, BarSurface,
    Measurement, ResizeThrottle, RunReport, SearchState, SurfaceError, Trigger,
};

const BAR_HEIGHT: f64 = 44.0;
const INDICATOR_WIDTH: f64 = 36.0;

#[derive(Debug)]
struct Region {
    name: &'static str,
    width: f64,
    /// Width of the open search field.
    expanded_width: Option<f64>,
    visible: bool,
}

/// Regions laid out left to right after a fixed branding block.
#[derive(Debug)]
struct SimulatedBar {
    width: f64,
    branding: f64,
    regions: Vec<Region>,
    indicator: bool,
    search: SearchState,
}

impl SimulatedBar {
    fn add(&mut self, name: &'static str, width: f64) -> usize {
        self.regions.push(Region {
            name,
            width,
            expanded_width: None,
            visible: true,
        });
        self.regions.len() - 1
    }

    fn add_search(&mut self, collapsed: f64, expanded: f64) -> usize {
        let idx = self.add("search", collapsed);
        self.regions[idx].expanded_width = Some(expanded);
        idx
    }

    fn region_width(&self, region: &Region) -> f64 {
        match region.expanded_width {
            Some(w) if self.search.is_expanded() => w,
            _ => region.width,
        }
    }

    /// Rects of the visible regions, in bar order.
    fn layout(&self) -> Vec<(&'static str, Rect)> {
        let mut x = self.branding;
        let mut out = Vec::new();
        for region in self.regions.iter().filter(|r| r.visible) {
            let w = self.region_width(region);
            out.push((region.name, Rect::new(x, 0.0, x + w, BAR_HEIGHT)));
            x += w;
        }
        if self.indicator {
            out.push(("…", Rect::new(x, 0.0, x + INDICATOR_WIDTH, BAR_HEIGHT)));
        }
        out
    }

    fn render(&self) -> String {
        let names: Vec<_> = self.layout().into_iter().map(|(name, _)| name).collect();
        names.join(" | ")
    }
}

impl BarSurface<usize> for SimulatedBar {
    fn measure(&mut self) -> Result<Measurement, SurfaceError> {
        if self.width <= 0.0 {
            return Err(SurfaceError::Detached);
        }
        let outer = Rect::new(0.0, 0.0, self.width, BAR_HEIGHT);
        let inner = self
            .layout()
            .into_iter()
            .fold(Rect::new(0.0, 0.0, self.branding, BAR_HEIGHT), |acc, (_, r)| {
                acc.union(r)
            });
        Ok(Measurement::new(outer, inner))
    }

    fn set_visible(&mut self, locator: &usize, visible: bool) -> Result<(), SurfaceError> {
        let region = self
            .regions
            .get_mut(*locator)
            .ok_or(SurfaceError::UnresolvedLocator)?;
        region.visible = visible;
        Ok(())
    }

    fn set_overflow_indicator(&mut self, visible: bool) {
        self.indicator = visible;
    }

    fn apply_search_state(&mut self, state: SearchState) {
        self.search = state;
    }
}

fn print_report(width: f64, report: &RunReport, bar: &SimulatedBar) {
    let breakpoint = report
        .breakpoint
        .map_or_else(|| "-".to_owned(), |b| b.to_string());
    println!(
        "{width:>6.0} {breakpoint:>3} {:?} [{}]",
        report.search.mode(),
        bar.render()
    );
    if !report.menu.is_empty() {
        let menu: Vec<_> = report.menu.iter().map(|e| e.id.as_str()).collect();
        println!("           menu: {}", menu.join(", "));
    }
    for event in &report.events {
        match event {
            BarEvent::ContentVisibilityChange { hidden } => {
                let hidden: Vec<_> = hidden.iter().map(|id| id.as_str()).collect();
                println!("           event: hidden content = [{}]", hidden.join(", "));
            }
            BarEvent::SearchFieldToggle { expanded } => {
                println!("           event: search expanded = {expanded}");
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bar = SimulatedBar {
        width: 1600.0,
        branding: 180.0,
        regions: Vec::new(),
        indicator: false,
        search: SearchState::COLLAPSED,
    };
    let title = bar.add("Title", 160.0);
    let subtitle = bar.add("Subtitle", 140.0);
    let tabs = bar.add("Tabs", 220.0);
    let search = bar.add_search(36.0, 276.0);
    let share = bar.add("Share", 36.0);
    let bell = bar.add("Bell", 36.0);
    let assistant = bar.add("Assistant", 36.0);
    let me = bar.add("Me", 36.0);
    let apps = bar.add("Apps", 36.0);

    let snapshot = BarSnapshot::new()
        .with_content("title", title)
        .with_content("subtitle", subtitle)
        .with_content("tabs", tabs)
        .with_search(search, None)
        .with_custom_item("share", share)
        .with_action(ActionConfig::new("bell", ActionRole::Notifications, bell))
        .with_action(ActionConfig::new("assistant", ActionRole::Assistant, assistant))
        .with_action(ActionConfig::new("me", ActionRole::Profile, me))
        .with_action(ActionConfig::new("apps", ActionRole::ProductSwitch, apps));

    let config = BarConfig::default();
    let mut throttle = ResizeThrottle::from_config(&config);
    let Ok(mut engine) = ActionBar::new(config) else {
        eprintln!("invalid bar configuration");
        return;
    };

    println!(" width  bp  search [bar]");
    // Shrink, then grow again, one frame every 16 ms.
    let widths = (0..=50)
        .map(|i| 1600.0 - f64::from(i) * 26.0)
        .chain((0..=50).map(|i| 300.0 + f64::from(i) * 26.0));
    let mut now = 0;
    for width in widths {
        now += 16;
        bar.width = width;
        if throttle.on_resize(now) || throttle.poll(now) {
            let report = engine.run(&snapshot, &mut bar, Trigger::Resize);
            print_report(width, &report, &bar);
        }
    }
    if let Some(deadline) = throttle.next_deadline() {
        throttle.poll(deadline);
        let report = engine.run(&snapshot, &mut bar, Trigger::Resize);
        print_report(bar.width, &report, &bar);
    }

    bar.width = 900.0;
    println!("\nuser opens search at {:.0}:", bar.width);
    engine.run(&snapshot, &mut bar, Trigger::Resize);
    let report = engine.toggle_search(&snapshot, &mut bar);
    print_report(bar.width, &report, &bar);
}
