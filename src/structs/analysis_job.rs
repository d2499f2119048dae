use crate::errors::{VscanError, VscanResult};

/// One remote analysis request for a (publisher, name) pair. The analysis id is
/// assigned by the service on successful submission, at most once.
#[derive(Debug, Clone)]
pub struct AnalysisJob {
    pub publisher: String,
    pub extension_name: String,
    analysis_id: Option<String>,
}

impl AnalysisJob {
    pub fn new(publisher: &str, extension_name: &str) -> Self {
        Self {
            publisher: publisher.to_string(),
            extension_name: extension_name.to_string(),
            analysis_id: None,
        }
    }

    pub fn extension_id(&self) -> String {
        format!("{}.{}", self.publisher, self.extension_name)
    }

    pub fn analysis_id(&self) -> Option<&str> {
        self.analysis_id.as_deref()
    }

    pub fn assign_analysis_id(&mut self, analysis_id: String) -> VscanResult<()> {
        if self.analysis_id.is_some() {
            return Err(VscanError::system_error(
                "analysis id assignment",
                &format!("job {} already has an analysis id", self.extension_id()),
            ));
        }
        self.analysis_id = Some(analysis_id);
        Ok(())
    }
}
