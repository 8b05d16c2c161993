//! Troubleshooting guide store
//!
//! The guide catalog is fixed editorial content; the store is read-only.

use std::sync::Arc;

use crate::models::TroubleshootGuide;

/// Read-only catalog of self-service troubleshooting guides
#[derive(Clone)]
pub struct GuidesRepository {
    guides: Arc<Vec<TroubleshootGuide>>,
}

impl Default for GuidesRepository {
    fn default() -> Self {
        Self {
            guides: Arc::new(builtin_guides()),
        }
    }
}

impl GuidesRepository {
    /// All guides in catalog order
    pub fn list(&self) -> Vec<TroubleshootGuide> {
        self.guides.as_ref().clone()
    }

    /// Case-insensitive substring search over title, category and steps
    pub fn search(&self, term: &str) -> Vec<TroubleshootGuide> {
        self.guides.iter().filter(|g| g.matches(term)).cloned().collect()
    }
}

fn guide(id: i32, title: &str, category: &str, difficulty: &str, steps: &[&str]) -> TroubleshootGuide {
    TroubleshootGuide {
        id,
        title: title.to_string(),
        category: category.to_string(),
        difficulty: difficulty.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_guides() -> Vec<TroubleshootGuide> {
    vec![
        guide(1, "Computer Won't Start", "Hardware", "Easy", &[
            "Check if the power cable is properly connected",
            "Press and hold the power button for 10 seconds",
            "Check if the power outlet is working by testing with another device",
            "Look for any lights on the computer - power LED or activity indicators",
            "If still not working, try a different power cable if available",
        ]),
        guide(2, "Printer Not Printing", "Hardware", "Easy", &[
            "Check if the printer is turned on and connected to power",
            "Verify the USB or network cable connection",
            "Check if there's paper in the paper tray",
            "Look for any error lights or messages on the printer display",
            "Try printing a test page from the printer's menu",
            "Check ink or toner levels",
        ]),
        guide(3, "No Internet Connection", "Network", "Medium", &[
            "Check if WiFi is enabled on your device",
            "Look for the WiFi icon in the system tray",
            "Try disconnecting and reconnecting to the WiFi network",
            "Restart your computer or device",
            "Check if other devices can connect to the internet",
            "Contact IT if the problem persists across multiple devices",
        ]),
        guide(4, "Screen Display Issues", "Hardware", "Medium", &[
            "Check if the monitor cable is securely connected",
            "Try adjusting the brightness and contrast settings",
            "Check if the monitor is set to the correct input source",
            "Test with a different cable if available",
            "Try connecting to a different monitor to isolate the issue",
        ]),
        guide(5, "Email Not Working", "Software", "Easy", &[
            "Check your internet connection",
            "Verify your email username and password",
            "Try logging into email through a web browser",
            "Check if the email server settings are correct",
            "Clear your email client cache and restart the application",
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_seeded() {
        let repo = GuidesRepository::default();
        assert_eq!(repo.list().len(), 5);
    }

    #[test]
    fn test_search_matches_steps() {
        let repo = GuidesRepository::default();
        let hits = repo.search("toner");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Printer Not Printing");
    }

    #[test]
    fn test_search_blank_returns_all() {
        let repo = GuidesRepository::default();
        assert_eq!(repo.search("").len(), 5);
        assert_eq!(repo.search("wifi").len(), 1);
    }
}
