use std::borrow::Cow;

use praonde_core::{Buzz, DiscoveryView, Event, Filter, Modal, PageKind, VibeReport};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;

use super::app::BrowseApp;

/// Cards drawn on the deck, the current one in front.
const STACK_DEPTH: usize = 3;

pub fn render(frame: &mut Frame, app: &mut BrowseApp) {
    app.viewport = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(5),    // Page
            Constraint::Length(3), // Bottom nav
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.session.page_kind() {
        PageKind::Discovery => render_discovery(frame, app, chunks[1]),
        PageKind::Saved => render_saved(frame, app, chunks[1]),
        PageKind::Profile => render_empty_state(
            frame,
            chunks[1],
            "Página de Perfil",
            "Esta área está em construção. Volte em breve!",
        ),
    }
    render_nav(frame, app.session.page_kind(), chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    if let Modal::Open { event, vibe } = app.session.modal() {
        render_modal(frame, event, *vibe);
    }
}

/// Where the details box sits inside `area`.
pub fn modal_area(area: Rect) -> Rect {
    centered_rect(70, 80, area)
}

fn render_header(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            "Pra Onde Vamos?",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  ★ {}/{} super likes",
                app.session.super_likes(),
                app.session.super_like_allotment()
            ),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_discovery(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    let Some(view) = app.session.discovery() else {
        return;
    };
    let has_card = view.top().is_some();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter bar
            Constraint::Min(3),    // Deck
            Constraint::Length(if has_card { 3 } else { 0 }),
        ])
        .split(area);

    render_filter_bar(frame, view, chunks[0]);
    render_deck(frame, view, chunks[1]);
    if has_card {
        render_actions(frame, app.session.super_likes(), chunks[2]);
    }
}

fn render_filter_bar(frame: &mut Frame, view: &DiscoveryView, area: Rect) {
    let mut spans = Vec::new();
    for filter in Filter::BAR {
        let style = if filter == view.filter() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!("{} restantes", view.remaining()),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_deck(frame: &mut Frame, view: &DiscoveryView, area: Rect) {
    let stack = view.stack(STACK_DEPTH);
    if stack.is_empty() {
        render_empty_state(
            frame,
            area,
            "Você viu todos os rolês por aqui!",
            "Volte mais tarde para novidades.",
        );
        return;
    }

    // Back cards peek out above the current one, each a little narrower.
    let depth = stack.len() as u16;
    for (i, event) in stack.iter().enumerate().rev() {
        let i = i as u16;
        let lift = depth - 1 - i;
        let card = Rect {
            x: area.x + 2 * i,
            y: area.y + lift,
            width: area.width.saturating_sub(4 * i),
            height: area.height.saturating_sub(lift),
        };
        frame.render_widget(Clear, card);
        if i == 0 {
            render_card(frame, event, card);
        } else {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {} ", event.name),
                    Style::default().fg(Color::DarkGray),
                ));
            frame.render_widget(block, card);
        }
    }
}

fn render_card(frame: &mut Frame, event: &Event, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(status_style(event.status));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    let mut badges = Vec::new();
    if event.featured {
        badges.push(Span::styled(
            "★ Destaque",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        badges.push(Span::raw(" "));
    }
    if let Some(vibe) = &event.vibe {
        badges.push(Span::styled(
            format!("♨ {}", vibe),
            Style::default().fg(Color::Black).bg(Color::Red),
        ));
    }
    if !badges.is_empty() {
        lines.push(Line::from(badges));
    }

    lines.push(Line::from(Span::styled(
        event.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::raw(format!("{} • {}  ", event.music_style, event.distance)),
        Span::styled(event.status.as_str(), status_style(event.status)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(event.description.clone()));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        ellipsize(&event.image, inner.width.saturating_sub(1) as usize).into_owned(),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn render_actions(frame: &mut Frame, super_likes: u32, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let super_style = if super_likes == 0 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let actions = Line::from(vec![
        Span::styled("[←/x]", key),
        Span::styled(" Passar    ", Style::default().fg(Color::Red)),
        Span::styled("[↑/s]", key),
        Span::styled(format!(" Super Like ({})    ", super_likes), super_style),
        Span::styled("[→/l]", key),
        Span::styled(" Gostar", Style::default().fg(Color::Green)),
    ]);

    let paragraph = Paragraph::new(actions)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_saved(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    let liked = app.session.liked();
    if liked.is_empty() {
        render_empty_state(
            frame,
            area,
            "Nenhum rolê salvo",
            "Curta os eventos que você gosta para eles aparecerem aqui!",
        );
        return;
    }

    let items: Vec<ListItem> = liked
        .iter()
        .map(|saved| {
            let mut title = vec![Span::styled(
                saved.event.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if saved.super_liked {
                title.push(Span::styled(" ★", Style::default().fg(Color::Yellow)));
            }
            ListItem::new(Text::from(vec![
                Line::from(title),
                Line::from(Span::styled(
                    format!("  {} • {}", saved.event.category, saved.event.music_style),
                    Style::default().fg(Color::Gray),
                )),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Meus Rolês "))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.saved_selected.min(liked.len() - 1)));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_empty_state(frame: &mut Frame, area: Rect, title: &str, body: &str) {
    let pad = area.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        body.to_string(),
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_nav(frame: &mut Frame, active: PageKind, area: Rect) {
    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    for (i, kind) in PageKind::NAV.iter().enumerate() {
        let style = if *kind == active {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let item = Paragraph::new(format!("F{} {}", i + 1, kind.label()))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(item, columns[i]);
    }
}

fn render_status_bar(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    let (text, style) = if let Some(error) = &app.last_error {
        (format!("Erro: {}", error), Style::default().fg(Color::Red))
    } else if let Some(notice) = &app.notice {
        (notice.clone(), Style::default().fg(Color::Green))
    } else {
        let help = if app.modal_open() {
            "1/2/3: Vibe  t: Ingresso  Esc: Fechar"
        } else {
            match app.session.page_kind() {
                PageKind::Discovery => "[/]: Filtro  Enter: Detalhes  Tab: Página  q: Sair",
                PageKind::Saved => "↑/↓: Navegar  Enter: Detalhes  Tab: Página  q: Sair",
                PageKind::Profile => "Tab: Página  q: Sair",
            }
        };
        (help.to_string(), Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_modal(frame: &mut Frame, event: &Event, vibe: VibeReport) {
    let area = modal_area(frame.area());
    frame.render_widget(Clear, area);

    let label = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Endereço: ", label),
            Span::raw(event.address.clone()),
        ]),
        Line::from(""),
        Line::from(event.description.clone()),
        Line::from(""),
        Line::from(Span::styled(event.image.clone(), dim)),
        Line::from(""),
        Line::from(Span::styled("Qual é a Vibe?", label)),
    ];

    match vibe {
        VibeReport::Pending => {
            let mut buttons = Vec::new();
            for (i, choice) in Buzz::VIBE_CHOICES.iter().enumerate() {
                buttons.push(Span::styled(
                    format!("[{}] {}", i + 1, choice.button_label()),
                    status_style(*choice),
                ));
                buttons.push(Span::raw("   "));
            }
            lines.push(Line::from(buttons));
        }
        VibeReport::Submitted => {
            lines.push(Line::from(Span::styled(
                "Obrigado por compartilhar!",
                Style::default().fg(Color::Green),
            )));
        }
    }

    if let Some(ticket) = &event.ticket {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "[t] Comprar Ingresso",
                Style::default().fg(Color::Black).bg(Color::Magenta),
            ),
            Span::styled(format!("  {}", ticket), dim),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", event.name), label))
        .title_bottom(Line::from(Span::styled(" [Esc] Fechar ", dim)));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn status_style(status: Buzz) -> Style {
    match status {
        Buzz::Bombando => Style::default().fg(Color::Red),
        Buzz::Medio => Style::default().fg(Color::Yellow),
        Buzz::Fraco => Style::default().fg(Color::Blue),
    }
}

/// Cut `s` to at most `max` grapheme clusters, marking the cut with "…".
fn ellipsize(s: &str, max: usize) -> Cow<'_, str> {
    if max == 0 {
        return Cow::Borrowed("");
    }
    match s.grapheme_indices(true).nth(max - 1) {
        Some((idx, _)) if s.grapheme_indices(true).nth(max).is_some() => {
            Cow::Owned(format!("{}…", &s[..idx]))
        }
        _ => Cow::Borrowed(s),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
