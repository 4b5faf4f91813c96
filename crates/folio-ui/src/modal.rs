// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Project video modal.

At most one modal is mounted. Escape is handled by a single listener that
asks [`VideoModal::is_open`], and close/backdrop clicks by one delegated
document listener, so repeated opens never stack handlers. The video source is
set as an attribute on a created element, never spliced into markup.
*/

use crate::effects::DomEffect;

pub const MODAL_CLASS: &str = "video-modal";
pub const MODAL_BACKDROP_CLASS: &str = "video-modal-backdrop";
pub const MODAL_CLOSE_CLASS: &str = "video-modal-close";
pub const MODAL_CONTENT_CLASS: &str = "video-modal-content";

#[derive(Debug, Default)]
pub struct VideoModal {
    open: bool,
}

impl VideoModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Mount the modal for `src`, replacing one that is already open
    pub fn open(&mut self, src: &str) -> Vec<DomEffect> {
        let mut effects = Vec::with_capacity(3);
        if self.open {
            effects.push(DomEffect::UnmountModal);
        }
        self.open = true;
        effects.push(DomEffect::MountModal { src: src.to_string() });
        effects.push(DomEffect::LockScroll);
        effects
    }

    pub fn close(&mut self) -> Vec<DomEffect> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        vec![DomEffect::UnmountModal, DomEffect::UnlockScroll]
    }

    pub fn backdrop_clicked(&mut self, on_backdrop: bool) -> Vec<DomEffect> {
        if on_backdrop {
            self.close()
        } else {
            Vec::new()
        }
    }

    pub fn key_down(&mut self, key: &str) -> Vec<DomEffect> {
        if key == "Escape" {
            self.close()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_cycle() {
        let mut modal = VideoModal::default();
        let effects = modal.open("/videos/project1.mp4");

        assert!(modal.is_open());
        assert_eq!(effects[0], DomEffect::MountModal { src: "/videos/project1.mp4".to_string() });
        assert_eq!(effects[1], DomEffect::LockScroll);

        assert_eq!(modal.close(), vec![DomEffect::UnmountModal, DomEffect::UnlockScroll]);
        assert!(modal.close().is_empty());
    }

    #[test]
    fn test_escape_and_backdrop() {
        let mut modal = VideoModal::default();
        assert!(modal.key_down("Escape").is_empty());

        modal.open("/v.mp4");
        assert!(modal.key_down("Enter").is_empty());
        assert!(modal.backdrop_clicked(false).is_empty());
        assert!(modal.is_open());
        assert!(!modal.key_down("Escape").is_empty());
        assert!(!modal.is_open());

        modal.open("/v.mp4");
        assert!(!modal.backdrop_clicked(true).is_empty());
        assert!(!modal.is_open());
    }

    #[test]
    fn test_reopen_replaces_existing_modal() {
        let mut modal = VideoModal::default();
        modal.open("/a.mp4");
        let effects = modal.open("/b.mp4");
        assert_eq!(effects[0], DomEffect::UnmountModal);
    }

    #[test]
    fn test_source_is_passed_through_untouched() {
        let mut modal = VideoModal::default();
        let src = r#"/v.mp4" onerror="alert(1)"#;
        let effects = modal.open(src);
        assert_eq!(effects[0], DomEffect::MountModal { src: src.to_string() });
    }
}
