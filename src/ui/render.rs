use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::painter::paint;
use crate::ui::theme::GLOBAL_BORDER;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget =
        Header::new(app.labels(), app.model().cards.len()).with_error(app.last_error());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    if let Some(root) = app.live_root() {
        let painted = paint(root, app.focus());
        let inner_height = body.height.saturating_sub(2) as usize;
        let scroll = painted.scroll_for(inner_height);
        let widget = Paragraph::new(painted.lines)
            .scroll((scroll.min(u16::MAX as usize) as u16, 0))
            .block(
                Block::default()
                    .borders(Borders::LEFT | Borders::RIGHT)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            );
        frame.render_widget(widget, body);
    }

    frame.render_widget(Footer::new(app.labels()).widget(), footer);
}
