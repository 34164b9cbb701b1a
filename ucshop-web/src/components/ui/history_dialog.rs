use crate::components::daisy_ui::{Badge, DaisyColor};
use crate::components::modal::Modal;
use crate::i18n::{fmt_datetime, fmt_rub, t, tr1};
use ucshop_core::{PurchaseRecord, PurchaseStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HistoryDialogProps {
    pub open: bool,
    pub records: Vec<PurchaseRecord>,
    pub total: u64,
    pub on_close: Callback<()>,
}

const fn status_color(status: PurchaseStatus) -> DaisyColor {
    match status {
        PurchaseStatus::Completed => DaisyColor::Success,
        PurchaseStatus::Pending => DaisyColor::Warning,
        PurchaseStatus::Failed => DaisyColor::Error,
    }
}

fn record_row(record: &PurchaseRecord) -> Html {
    let status_label = t(&format!("history.status.{}", record.status.key()));
    html! {
        <li key={record.id.clone()} class="history-item" data-record-id={record.id.clone()}>
            <div class="history-item__main">
                <span class="history-item__amount">{ format!("{} UC", record.amount) }</span>
                <span class="history-item__price">{ fmt_rub(u64::from(record.price)) }</span>
            </div>
            <div class="history-item__meta text-sm">
                <time datetime={record.date.to_rfc3339()}>{ fmt_datetime(&record.date) }</time>
                <span>{ record.payment_method.clone() }</span>
                <span>{ tr1("history.player", "id", &record.player_id) }</span>
            </div>
            <Badge
                class="history-item__status"
                variant={status_color(record.status)}
                label={status_label}
            />
        </li>
    }
}

#[function_component(HistoryDialog)]
pub fn history_dialog(props: &HistoryDialogProps) -> Html {
    let body = if props.records.is_empty() {
        html! { <p class="history-empty">{ t("history.empty") }</p> }
    } else {
        html! {
            <>
                <ul class="history-list">
                    { for props.records.iter().map(record_row) }
                </ul>
                <div class="history-total">
                    <span>{ t("history.total") }</span>
                    <strong data-testid="history-total">{ fmt_rub(props.total) }</strong>
                </div>
            </>
        }
    };
    let count = props.records.len().to_string();

    html! {
        <Modal
            id="history-dialog"
            open={props.open}
            title={t("history.title")}
            description={AttrValue::from(tr1("history.count", "count", &count))}
            on_close={props.on_close.clone()}
        >
            { body }
        </Modal>
    }
}
