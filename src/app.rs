use std::time::Duration;

use anyhow::Context;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use crate::config::{load_settings, Settings};
use crate::infra::http::webhook::HttpWebhook;
use crate::ui::notice::Notice;
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::sink::SubmitError;
use crate::usecase::services::import_service::ImportService;
use crate::usecase::services::submit_service::SubmitService;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
const NOTICE_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone)]
pub struct Services {
    pub import: ImportService,
    pub submit: SubmitService<HttpWebhook>,
}

pub fn build_services(settings: &Settings) -> Result<Services, SubmitError> {
    let webhook = HttpWebhook::new(settings.webhook_url.clone(), settings.request_timeout)?;
    Ok(Services {
        import: ImportService::new(),
        submit: SubmitService::new(webhook),
    })
}

fn bootstrap_services() -> anyhow::Result<Services> {
    let settings = load_settings()?;
    info!(url = %settings.webhook_url, "loaded settings");
    build_services(&settings).context("failed to build http client")
}

fn push_notice(
    mut notices: Signal<Vec<(u64, Notice)>>,
    mut next_notice_id: Signal<u64>,
    notice: Notice,
) {
    let id = next_notice_id();
    *next_notice_id.write() = id + 1;
    notices.write().push((id, notice));

    spawn(async move {
        tokio::time::sleep(NOTICE_LIFETIME).await;
        notices.write().retain(|(existing, _)| *existing != id);
    });
}

#[component]
fn RecordGrid(entries: Vec<(&'static str, String)>, extracted_at: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                h2 { style: "margin: 0; color: #1e3a8a;", "Dados Extraídos" }
                span { style: "color: #6b7280; font-size: 12px;", "Extraído às {extracted_at}" }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px;",
                {entries.iter().map(|(address, value)| {
                    let address = *address;
                    let value = value.clone();
                    rsx!(
                        div {
                            key: "{address}",
                            style: "padding: 10px 12px; background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.12);",
                            span { style: "font-weight: 600; color: #2563eb;", "{address}:" }
                            span { style: "margin-left: 8px; color: #374151;", "{value}" }
                        }
                    )
                })}
            }
        }
    }
}

#[component]
fn NoticeStack(notices: Vec<(u64, Notice)>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div {
            style: "position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 1200;",
            {notices.iter().map(|(id, notice)| {
                let id = *id;
                let (border, background) = if notice.is_error() {
                    ("#dc2626", "#fef2f2")
                } else {
                    ("#16a34a", "#f0fdf4")
                };
                let title = notice.title;
                let message = notice.message;
                rsx!(
                    div {
                        key: "{id}",
                        style: "min-width: 260px; padding: 10px 14px; border-left: 4px solid {border}; background: {background}; border-radius: 6px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); cursor: pointer;",
                        onclick: move |_| on_dismiss.call(id),
                        div { style: "font-weight: 600;", "{title}" }
                        div { "{message}" }
                    }
                )
            })}
        }
    }
}

#[component]
pub fn App() -> Element {
    let AppState {
        mut session,
        mut busy,
        mut notices,
        next_notice_id,
    } = AppState::new();

    let services = use_hook(|| bootstrap_services().map_err(|err| format!("{err:#}")));
    let services = match services {
        Ok(services) => services,
        Err(err) => {
            return rsx! {
                div {
                    style: "padding: 32px; font-family: sans-serif;",
                    h1 { "Importador de Planilhas" }
                    p { "Não foi possível carregar a configuração: {err}" }
                }
            };
        }
    };

    let import_service = services.import.clone();
    let submit_service = services.submit.clone();

    let current = session();
    let can_submit = current.has_record() && !busy();
    let record_view = current.record().map(|record| {
        (
            record
                .iter()
                .map(|(address, value)| (address, value.to_string()))
                .collect::<Vec<_>>(),
            record.extracted_at().format("%H:%M:%S").to_string(),
        )
    });

    rsx! {
        div {
            style: "min-height: 100vh; background: linear-gradient(#eff6ff, #fff); padding: 32px; font-family: sans-serif;",
            div {
                style: "max-width: 960px; margin: 0 auto; background: #fff; border-radius: 12px; padding: 32px; box-shadow: 0 4px 16px rgba(0,0,0,0.08); display: flex; flex-direction: column; gap: 24px;",
                h1 { style: "margin: 0; color: #1e3a8a;", "Importador de Planilhas" }

                div {
                    style: "display: flex; flex-direction: column; align-items: center; padding: 32px; border: 2px dashed #bfdbfe; border-radius: 8px; background: #eff6ff;",
                    button {
                        style: "border: 1px solid #bbb; background: #fff; padding: 8px 16px; border-radius: 6px; cursor: pointer;",
                        disabled: busy(),
                        onclick: move |_| {
                            if busy() {
                                return;
                            }
                            *busy.write() = true;

                            let import = import_service.clone();
                            spawn(async move {
                                let picked = AsyncFileDialog::new()
                                    .set_title("Selecionar planilha")
                                    .add_filter("Planilha", SPREADSHEET_EXTENSIONS)
                                    .pick_file()
                                    .await
                                    .map(|handle| handle.path().to_path_buf());

                                let mut next = session();
                                let outcome = import.import(&mut next, picked).await;
                                if let Err(err) = &outcome {
                                    warn!(error = %err, "import failed");
                                }
                                session.set(next);
                                push_notice(notices, next_notice_id, Notice::for_import(&outcome));
                                *busy.write() = false;
                            });
                        },
                        "Selecionar Arquivo XLSX"
                    }
                }

                {record_view.map(|(entries, extracted_at)| rsx! {
                    RecordGrid { entries, extracted_at }
                    button {
                        style: "width: 100%; padding: 10px; border: none; border-radius: 6px; background: #2563eb; color: #fff; cursor: pointer;",
                        disabled: !can_submit,
                        onclick: move |_| {
                            if busy() {
                                return;
                            }
                            *busy.write() = true;

                            let submit = submit_service.clone();
                            spawn(async move {
                                let snapshot = session();
                                let outcome = submit.submit(&snapshot).await;
                                push_notice(notices, next_notice_id, Notice::for_submit(&outcome));
                                *busy.write() = false;
                            });
                        },
                        "Enviar dados"
                    }
                })}
            }

            NoticeStack {
                notices: notices(),
                on_dismiss: move |id: u64| {
                    notices.write().retain(|(existing, _)| *existing != id);
                },
            }
        }
    }
}
