mod draft_tests;
mod gallery_tests;
