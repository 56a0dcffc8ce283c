use iced::widget::{button, column, container, scrollable, stack, text};
use iced::{Center, Element, Fill, Font};

use crate::app::Message;
use crate::i18n::{Language, translate};
use crate::task::{Task, TaskList};
use crate::ui::controls::view_controls;
use crate::ui::icons::{clipboard, plus_icon};
use crate::ui::styles::{self, subtle};

pub fn view(tasks: &TaskList, hydrated: bool, language: Language) -> Element<'_, Message> {
    if !hydrated {
        return loading_view();
    }

    let body = if tasks.is_empty() {
        empty_state()
    } else {
        let sections = column![
            section("section-todo", tasks.pending()),
            section("section-done", tasks.completed()),
        ];

        scrollable(sections.padding(iced::Padding {
            top: 8.0,
            left: 0.0,
            bottom: 100.0,
            right: 0.0,
        }))
        .height(Fill)
        .into()
    };

    let list = column![
        container(view_controls(tasks, language)).padding([0, 20]),
        body,
    ]
    .height(Fill);

    let fab = container(
        button(plus_icon().width(Fill))
            .on_press(Message::OpenAddTask)
            .width(56)
            .height(56)
            .style(styles::filled),
    )
    .width(Fill)
    .height(Fill)
    .align_x(iced::alignment::Horizontal::Right)
    .align_y(iced::alignment::Vertical::Bottom)
    .padding(iced::Padding {
        top: 0.0,
        left: 0.0,
        bottom: 32.0,
        right: 20.0,
    });

    stack![list, fab].into()
}

fn loading_view<'a>() -> Element<'a, Message> {
    container(text(translate("loading")).size(16).style(subtle))
        .center(Fill)
        .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    container(
        column![
            clipboard(),
            text(translate("empty-title")).size(20).font(Font {
                weight: iced::font::Weight::Semibold,
                ..Font::DEFAULT
            }),
            text(translate("empty-subtitle"))
                .size(15)
                .align_x(Center)
                .style(subtle),
        ]
        .spacing(8)
        .align_x(Center),
    )
    .center_x(Fill)
    .padding(iced::Padding {
        top: 80.0,
        left: 40.0,
        bottom: 0.0,
        right: 40.0,
    })
    .height(Fill)
    .into()
}

/// A titled group of rows. Empty groups render nothing.
fn section<'a>(key: &str, tasks: impl Iterator<Item = &'a Task>) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = tasks
        .map(|task| container(task.view()).padding([4, 16]).into())
        .collect();

    if rows.is_empty() {
        return column![].into();
    }

    let header = text(translate(key).to_uppercase())
        .size(13)
        .font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        })
        .style(subtle);

    column![container(header).padding(iced::Padding {
        top: 20.0,
        left: 20.0,
        bottom: 8.0,
        right: 20.0,
    })]
    .extend(rows)
    .into()
}

