//! Dashboard layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, Paragraph};

use super::runtime::App;
use super::style;
use crate::view::{self, Readouts, group_thousands};

/// Renders the full dashboard frame.
pub fn render(frame: &mut Frame, app: &App) {
    let readouts = app.readouts();
    let details_height = if app.flags.show_details { 6 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // header
            Constraint::Length(3),              // global stats
            Constraint::Length(1),              // weather strip
            Constraint::Length(6),              // gauges
            Constraint::Length(3),              // energy flow
            Constraint::Length(3),              // impact stats
            Constraint::Length(details_height), // predictive analytics
            Constraint::Min(6),                 // history chart
            Constraint::Length(1),              // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_global(frame, app, chunks[1]);
    render_weather(frame, app, &readouts, chunks[2]);
    render_gauges(frame, app, &readouts, chunks[3]);
    render_flow(frame, app, &readouts, chunks[4]);
    render_impact(frame, app, chunks[5]);
    if app.flags.show_details {
        render_analytics(frame, chunks[6]);
    }
    render_chart(frame, app, chunks[7]);
    render_footer(frame, app, chunks[8]);
}

/// Header bar: title, region badge, charging and details labels.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let charging_color = if app.flags.is_charging {
        style::CHARGING_ON
    } else {
        style::CHARGING_OFF
    };
    let header = Line::from(vec![
        Span::styled(
            " GLOBAL ENERGY ECOSYSTEM ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.flags.selected_region.label(),
            Style::default()
                .fg(style::REGION_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            app.flags.charging_label(),
            Style::default().fg(charging_color),
        ),
        Span::raw(format!(" │ {} ", app.flags.details_label())),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Fleet-wide counters and aggregates.
fn render_global(frame: &mut Frame, app: &App, area: Rect) {
    let g = &app.snapshot().global;
    let cells = [
        ("Total Powerwalls", group_thousands(g.total_powerwall)),
        ("Solar Roofs", group_thousands(g.total_solar_roof)),
        ("Global Output", format!("{} GW", g.global_output)),
        ("CO₂ Offset", format!("{}M tons", g.co2_offset)),
    ];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    for ((title, value), col) in cells.into_iter().zip(columns.iter()) {
        let p = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().title(format!(" {title} ")).borders(Borders::ALL));
        frame.render_widget(p, *col);
    }
}

/// Clock, weather and efficiency strip.
fn render_weather(frame: &mut Frame, app: &App, r: &Readouts, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" ☀ ", Style::default().fg(style::sky_color(r.daylight))),
        Span::styled(r.clock.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            "  {}°F  {} mph  {}%  {}  │ System Efficiency: ",
            r.temperature_f,
            r.wind_mph,
            r.humidity_pct,
            app.snapshot().weather.condition,
        )),
        Span::styled(
            format!("{}%", app.snapshot().efficiency),
            Style::default()
                .fg(style::efficiency_color(r.efficiency_band))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Solar, Powerwall and vehicle gauges with optional detail lines.
fn render_gauges(frame: &mut Frame, app: &App, r: &Readouts, area: Rect) {
    let s = app.snapshot();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let details = app.flags.show_details;
    let vehicle_title = if app.flags.is_charging {
        " Model 3 ⚡ "
    } else {
        " Model 3 "
    };
    let panels = [
        (
            " Solar Production ",
            style::SOLAR_COLOR,
            s.solar.output,
            r.solar_pct,
            [
                format!("Peak Today {} kW", view::PEAK_TODAY_KW),
                format!("Daily Average {} kW", view::DAILY_AVERAGE_KW),
            ],
        ),
        (
            " Powerwall ",
            style::BATTERY_COLOR,
            s.battery.charge,
            r.battery_pct,
            [
                format!("Time to Full {} hours", r.time_to_full_hours),
                format!("Backup Reserve {}%", view::BACKUP_RESERVE_PCT),
            ],
        ),
        (
            vehicle_title,
            style::VEHICLE_COLOR,
            s.vehicle.charge,
            r.vehicle_pct,
            [
                format!("Range {} mi", r.vehicle_range_miles),
                format!("Charging Rate {} mph", view::CHARGING_RATE_MPH),
            ],
        ),
    ];

    for ((title, color, percent, rounded, lines), col) in panels.into_iter().zip(columns.iter()) {
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(*col);
        frame.render_widget(block, *col);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(style::ratio(percent))
            .label(format!("{rounded}%"));
        frame.render_widget(gauge, rows[0]);

        if details {
            let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
            frame.render_widget(Paragraph::new(text), rows[1]);
        }
    }
}

/// Solar → storage → home → vehicle flow line.
fn render_flow(frame: &mut Frame, app: &App, r: &Readouts, area: Rect) {
    let u = &app.snapshot().usage;
    let line = Line::from(vec![
        Span::styled("Solar ", Style::default().fg(style::SOLAR_COLOR)),
        Span::raw(format!("{:.1} kW  →  ", r.solar_kw)),
        Span::styled("Storage ", Style::default().fg(style::BATTERY_COLOR)),
        Span::raw(format!("{:.1} kWh  →  ", r.storage_kwh)),
        Span::styled("Home ", Style::default().fg(style::HOME_COLOR)),
        Span::raw(format!("{} kW  →  ", u.home)),
        Span::styled("Vehicle ", Style::default().fg(style::VEHICLE_COLOR)),
        Span::raw(format!("{} kW", u.car)),
    ]);
    let p = Paragraph::new(line).block(
        Block::default()
            .title(" Live Energy Flow ")
            .borders(Borders::ALL),
    );
    frame.render_widget(p, area);
}

/// Cumulative savings.
fn render_impact(frame: &mut Frame, app: &App, area: Rect) {
    let st = &app.snapshot().stats;
    let line = Line::from(format!(
        "  Energy Saved {:.1} kWh   CO₂ Reduced {:.1} tons   Money Saved ${:.1}",
        st.energy_saved, st.co2_reduced, st.money_saved,
    ));
    let p = Paragraph::new(line).block(Block::default().title(" Impact ").borders(Borders::ALL));
    frame.render_widget(p, area);
}

/// Static forecast and tips shown with the details.
fn render_analytics(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(area);

    let forecast: Vec<Line> = view::FORECAST
        .iter()
        .map(|(k, v)| Line::from(format!("  {k:<22}{v}")))
        .collect();
    frame.render_widget(
        Paragraph::new(forecast).block(
            Block::default()
                .title(" Next 24 Hours ")
                .borders(Borders::ALL),
        ),
        columns[0],
    );

    let tips: Vec<Line> = view::TIPS
        .iter()
        .map(|t| Line::from(format!("  • {t}")))
        .collect();
    frame.render_widget(
        Paragraph::new(tips).block(
            Block::default()
                .title(" Optimization Tips ")
                .borders(Borders::ALL),
        ),
        columns[1],
    );
}

/// Solar output and battery charge over the rolling history.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let solar_data: Vec<(f64, f64)> = app
        .history
        .iter()
        .map(|s| (s.tick as f64, s.solar.output))
        .collect();
    let battery_data: Vec<(f64, f64)> = app
        .history
        .iter()
        .map(|s| (s.tick as f64, s.battery.charge))
        .collect();

    let x_lo = solar_data.first().map_or(0.0, |p| p.0);
    let x_hi = solar_data.last().map_or(1.0, |p| p.0).max(x_lo + 1.0);

    let datasets = vec![
        Dataset::default()
            .name("Solar %")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::SOLAR_COLOR))
            .data(&solar_data),
        Dataset::default()
            .name("Battery %")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::BATTERY_COLOR))
            .data(&battery_data),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title(" History ").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("tick")
                .bounds([x_lo, x_hi])
                .labels(vec![format!("{}", x_lo as u64), format!("{}", x_hi as u64)]),
        )
        .y_axis(
            Axis::default()
                .title("%")
                .bounds([0.0, 100.0])
                .labels(vec!["0".to_string(), "100".to_string()]),
        );

    frame.render_widget(chart, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(
            " q:Quit  Space:{}  d:{}  ←/→:Region  s:Settings  │ tick {}",
            app.flags.charging_label(),
            app.flags.details_label(),
            app.snapshot().tick,
        ),
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
