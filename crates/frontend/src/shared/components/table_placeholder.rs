use leptos::prelude::*;
use thaw::*;

/// What the table body shows for a given load state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyState {
    Loading,
    Empty,
    Rows(usize),
}

impl BodyState {
    pub fn of(loading: bool, row_count: usize) -> Self {
        if loading {
            BodyState::Loading
        } else if row_count == 0 {
            BodyState::Empty
        } else {
            BodyState::Rows(row_count)
        }
    }
}

/// Full-width row shown while a table's data is loading
#[component]
pub fn TableLoadingRow(colspan: u32) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell attr:colspan=colspan.to_string() class="table__placeholder">
                <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                    <Spinner />
                    "Loading..."
                </Flex>
            </TableCell>
        </TableRow>
    }
}

/// Full-width row shown when a loaded table has no rows
#[component]
pub fn TableEmptyRow(colspan: u32, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell attr:colspan=colspan.to_string() class="table__placeholder table__placeholder--empty">
                {text}
            </TableCell>
        </TableRow>
    }
}
