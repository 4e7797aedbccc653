use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode};
use futures_util::StreamExt;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Table},
    Frame,
};
use std::time::Duration;
use tokio::sync::{mpsc::Receiver, oneshot};

use crate::{feed::DashboardSnapshot, holdings, AppEvent};

pub struct App {
    should_quit: bool,
    rx: Receiver<AppEvent>,
    first_frame: Option<oneshot::Sender<()>>,
    snapshot: Option<DashboardSnapshot>,
}

impl App {
    pub fn new(rx: Receiver<AppEvent>, first_frame: oneshot::Sender<()>) -> Self {
        Self {
            should_quit: false,
            rx,
            first_frame: Some(first_frame),
            snapshot: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let _ = terminal.clear();

        let mut events = EventStream::new();

        let period = Duration::from_secs_f64(1.0 / 20.0);
        let mut interval = tokio::time::interval(period);

        while !self.should_quit {
            tokio::select! {
                _ = interval.tick() => {
                    terminal.draw(|frame| self.render(frame))?;
                    self.notify_first_frame();
                },
                Some(Ok(event)) = events.next() => self.handle_events(event),
                Some(event) = self.rx.recv() =>
                    self.handle_app_events(event)
            }
        }

        Ok(())
    }

    fn handle_app_events(&mut self, event: AppEvent) {
        match event {
            AppEvent::Snapshot(snapshot) => {
                // first snapshot wins, there is no re-fetch
                if self.snapshot.is_none() {
                    self.snapshot = Some(snapshot);
                }
            }
        }
    }

    fn handle_events(&mut self, event: Event) {
        if let Some(key) = event.as_key_press_event() {
            if let KeyCode::Char('q') = key.code {
                self.should_quit = true;
            }
        }
    }

    // Tells the feed the loading frame is on screen. Data generation stays
    // deferred until this fires.
    fn notify_first_frame(&mut self) {
        if let Some(tx) = self.first_frame.take() {
            let _ = tx.send(());
        }
    }

    fn render(&self, frame: &mut Frame) {
        if self.snapshot.is_none() {
            frame.render_widget(Paragraph::new("Loading dashboard…"), frame.area());
            return;
        }

        let [header_area, cards_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        let [table_area, chart_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(main_area);

        self.render_header(frame, header_area);
        self.render_footer(frame, footer_area);
        self.render_cards(frame, cards_area);
        self.render_transactions(frame, table_area);
        self.render_chart(frame, chart_area);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };
        let metrics = &snapshot.metrics;

        let [balance_area, trades_area, pnl_area, positions_area] =
            Layout::horizontal([Constraint::Fill(1); 4]).areas(area);

        render_card(
            frame,
            balance_area,
            "Account Balance",
            format!("$ {}", metrics.balance.round_dp(2)),
            Style::default().fg(Color::Yellow),
        );
        render_card(
            frame,
            trades_area,
            "Total Trades",
            metrics.total_trades.to_string(),
            Style::default(),
        );
        render_card(
            frame,
            pnl_area,
            "Net P&L",
            format!("$ {}", metrics.net_pnl.round_dp(2)),
            Style::default().fg(if metrics.net_pnl.is_sign_negative() {
                Color::Red
            } else {
                Color::Green
            }),
        );
        render_card(
            frame,
            positions_area,
            "Active Positions",
            metrics.active_positions.to_string(),
            Style::default(),
        );
    }

    fn render_transactions(&self, frame: &mut Frame, area: Rect) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };
        let block = Block::default()
            .title("Recent Transactions")
            .borders(Borders::ALL);

        let header = Row::new(["Date", "Symbol", "Type", "Amount", "User"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = snapshot
            .transactions
            .iter()
            .map(|tx| {
                Row::new([
                    tx.date.clone(),
                    tx.symbol.clone(),
                    tx.side.to_string(),
                    format!("$ {}", tx.amount.round_dp(2)),
                    tx.user.clone(),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Fill(1),
        ];

        let table = Table::new(rows, widths).header(header).block(block);
        frame.render_widget(table, area);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };
        let block = Block::default()
            .title("Portfolio Value Over Time")
            .borders(Borders::ALL);

        let bars: Vec<Bar> = holdings::to_bars(&snapshot.holdings)
            .into_iter()
            .map(|(label, value)| {
                Bar::default()
                    .label(Line::from(label))
                    .value(value)
                    .style(Style::default().fg(Color::Green))
            })
            .collect();

        let chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(1)
            .block(block);

        frame.render_widget(chart, area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Crypto Dashboard")
            .borders(Borders::ALL);
        frame.render_widget(block, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let p1 = Paragraph::new(Line::from("Press 'q' to quit")).block(block);
        frame.render_widget(p1, area);
    }
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: String, style: Style) {
    let block = Block::default().title(title).borders(Borders::ALL);
    let p = Paragraph::new(Line::styled(value, style)).block(block);
    frame.render_widget(p, area);
}
