use crate::usecase::ports::sink::SubmitError;
use crate::usecase::services::import_service::ImportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient message shown after an import or submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub message: &'static str,
}

impl Notice {
    fn success(message: &'static str) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: "Sucesso",
            message,
        }
    }

    fn error(message: &'static str) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Erro",
            message,
        }
    }

    pub fn for_import(outcome: &Result<(), ImportError>) -> Self {
        match outcome {
            Ok(()) => Self::success("Dados extraídos com sucesso!"),
            Err(ImportError::NoFileSelected) => Self::error("Nenhum arquivo selecionado"),
            Err(ImportError::Read { .. } | ImportError::Extract(_)) => {
                Self::error("Erro ao ler o arquivo")
            }
        }
    }

    pub fn for_submit(outcome: &Result<(), SubmitError>) -> Self {
        match outcome {
            Ok(()) => Self::success("Dados enviados com sucesso!"),
            Err(SubmitError::NoData) => Self::error("Nenhum dado para enviar"),
            Err(SubmitError::Transport(_) | SubmitError::Status(_)) => {
                Self::error("Erro ao enviar dados")
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}
