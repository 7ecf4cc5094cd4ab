use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::{
    api::{ApiClient, CredentialStore},
    modal::{ModalController, ModalMode},
    presentation::{self, UiContext},
    store::{Effect, NetEvent, Pending, Store},
};

use super::{
    focus::{ModalField, ModalFocus},
    input::{self, InputContext, KeyCommand},
    login::LoginForm,
    options::AppOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

const LOGIN_HELP: &str = "Tab switch field • Enter sign in • Ctrl+Q quit";
const TABLE_HELP: &str =
    "↑/↓ select • Enter view • e edit • d delete • c new • r refresh • q quit";
const MODAL_EDIT_HELP: &str =
    "Tab/↑/↓ field • Ctrl+S confirm • Ctrl+A/Ctrl+X image slot • Esc cancel";
const MODAL_VIEW_HELP: &str = "Esc/Enter close";
const MODAL_DELETE_HELP: &str = "Enter delete • Esc cancel";

pub(crate) struct App {
    client: ApiClient,
    credentials: CredentialStore,
    options: AppOptions,
    store: Store,
    modal: ModalController,
    login: LoginForm,
    focus: ModalFocus,
    selected: usize,
    status: StatusLine,
    net_tx: UnboundedSender<NetEvent>,
    net_rx: UnboundedReceiver<NetEvent>,
    handle: tokio::runtime::Handle,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(
        client: ApiClient,
        credentials: CredentialStore,
        options: AppOptions,
        handle: tokio::runtime::Handle,
        net_tx: UnboundedSender<NetEvent>,
        net_rx: UnboundedReceiver<NetEvent>,
    ) -> Self {
        Self {
            client,
            credentials,
            options,
            store: Store::new(),
            modal: ModalController::new(),
            login: LoginForm::new(),
            focus: ModalFocus::default(),
            selected: 0,
            status: StatusLine::new(),
            net_tx,
            net_rx,
            handle,
            should_quit: false,
        }
    }

    /// Restores a persisted credential and issues the startup session check.
    /// Without one, the login view is what renders first.
    pub(crate) fn bootstrap(&mut self) {
        match self.credentials.load() {
            Ok(Some(credentials)) => {
                self.client.set_token(credentials.token.clone());
                if self.store.begin(Pending::CheckSession) {
                    let client = self.client.clone();
                    let tx = self.net_tx.clone();
                    self.handle.spawn(async move {
                        let result = client.check_session().await;
                        let _ = tx.send(NetEvent::SessionChecked(result));
                    });
                    self.status.checking_session();
                }
            }
            Ok(None) => self.status.sign_in_required(),
            Err(err) => {
                warn!(error = %err, "could not read stored credentials");
                self.status.sign_in_required();
            }
        }
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.drain_net_events();
            if event::poll(self.options.tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn context(&self) -> InputContext {
        if self.modal.is_open() {
            InputContext::Modal
        } else if self.store.is_authenticated() {
            InputContext::Table
        } else {
            InputContext::Login
        }
    }

    fn help(&self) -> &'static str {
        match self.context() {
            InputContext::Login => LOGIN_HELP,
            InputContext::Table => TABLE_HELP,
            InputContext::Modal => match self.modal.mode() {
                Some(ModalMode::View) => MODAL_VIEW_HELP,
                Some(ModalMode::Delete) => MODAL_DELETE_HELP,
                _ => MODAL_EDIT_HELP,
            },
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = self.options.show_help.then(|| self.help());
        presentation::draw(
            frame,
            UiContext {
                store: &self.store,
                modal: &self.modal,
                login: &self.login,
                selected: self.selected,
                focus_index: self.focus.index(self.modal.draft()),
                status: self.status.message(),
                help,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.context() {
            InputContext::Login => self.handle_login_key(key),
            InputContext::Table => self.handle_table_key(key),
            InputContext::Modal => self.handle_modal_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match input::classify(&key, InputContext::Login) {
            KeyCommand::Quit => self.should_quit = true,
            KeyCommand::Confirm => self.submit_sign_in(),
            KeyCommand::NextField | KeyCommand::PrevField => self.login.focus_next(),
            KeyCommand::Cancel => self.status.ready(),
            KeyCommand::Edit(key) => {
                input::edit_text(self.login.focused_buffer_mut(), &key);
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        match input::classify(&key, InputContext::Table) {
            KeyCommand::Quit => self.should_quit = true,
            KeyCommand::Refresh => self.request_refresh(),
            KeyCommand::RowStep(delta) => self.step_row(delta),
            KeyCommand::OpenCreate => self.open_modal(ModalMode::Create),
            KeyCommand::OpenView => self.open_modal(ModalMode::View),
            KeyCommand::OpenEdit => self.open_modal(ModalMode::Edit),
            KeyCommand::OpenDelete => self.open_modal(ModalMode::Delete),
            KeyCommand::Cancel => self.status.ready(),
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match input::classify(&key, InputContext::Modal) {
            KeyCommand::Quit => self.should_quit = true,
            KeyCommand::Cancel => {
                self.modal.close();
                self.status.ready();
            }
            KeyCommand::NextField => self.step_focus(1),
            KeyCommand::PrevField => self.step_focus(-1),
            KeyCommand::Confirm => self.confirm_modal(),
            KeyCommand::Activate => self.activate_focused(),
            KeyCommand::GalleryAdd => self.gallery_add(),
            KeyCommand::GalleryRemove => self.gallery_remove(),
            KeyCommand::Edit(key) => self.edit_focused(&key),
            _ => {}
        }
    }

    fn step_row(&mut self, delta: i32) {
        let len = self.store.products().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as i32 + delta;
        self.selected = next.clamp(0, len as i32 - 1) as usize;
    }

    fn open_modal(&mut self, mode: ModalMode) {
        let record = match mode {
            ModalMode::Create => None,
            _ => {
                let Some(record) = self.store.products().get(self.selected) else {
                    return;
                };
                Some(record.clone())
            }
        };
        self.modal.open(mode, record.as_ref());
        self.focus.reset();
        self.status.set_raw(self.modal.title());
    }

    fn step_focus(&mut self, delta: i32) {
        if self.modal.mode().is_some_and(ModalMode::is_editable) {
            self.focus.step(self.modal.draft(), delta);
        }
    }

    /// Enter inside the modal: toggles the checkbox, confirms a delete,
    /// closes a view, and otherwise just advances the focus.
    fn activate_focused(&mut self) {
        match self.modal.mode() {
            Some(ModalMode::Delete) => self.confirm_modal(),
            Some(ModalMode::View) => {
                self.modal.close();
                self.status.ready();
            }
            Some(_) => {
                if self.focus.current(self.modal.draft()) == ModalField::Enabled {
                    self.modal.draft_mut().toggle_enabled();
                } else {
                    self.step_focus(1);
                }
            }
            None => {}
        }
    }

    fn edit_focused(&mut self, key: &KeyEvent) {
        if !self.modal.mode().is_some_and(ModalMode::is_editable) {
            return;
        }
        match self.focus.current(self.modal.draft()) {
            ModalField::Enabled => {
                if matches!(key.code, crossterm::event::KeyCode::Char(' ')) {
                    self.modal.draft_mut().toggle_enabled();
                }
            }
            ModalField::Text(field) => {
                let mut buffer = self.modal.draft().text(field).to_string();
                if input::edit_text(&mut buffer, key) {
                    self.modal.draft_mut().set_text(field, buffer);
                    self.status.editing(super::focus::field_label(field));
                }
            }
            ModalField::GallerySlot(index) => {
                let Some(slot) = self.modal.draft().gallery().slot(index) else {
                    return;
                };
                let mut buffer = slot.to_string();
                if input::edit_text(&mut buffer, key) {
                    self.modal.draft_mut().gallery_mut().set_slot(index, buffer);
                    self.status.editing(&ModalField::GallerySlot(index).label());
                }
            }
        }
    }

    fn gallery_add(&mut self) {
        if !self.modal.mode().is_some_and(ModalMode::is_editable) {
            return;
        }
        let draft = self.modal.draft_mut();
        if draft.gallery().can_add_slot() && draft.gallery_mut().add_slot() {
            self.status.set_raw("Image slot added");
        }
    }

    fn gallery_remove(&mut self) {
        if !self.modal.mode().is_some_and(ModalMode::is_editable) {
            return;
        }
        if self.modal.draft_mut().gallery_mut().remove_last() {
            self.status.set_raw("Image slot removed");
        }
    }

    fn submit_sign_in(&mut self) {
        if !self.store.begin(Pending::SignIn) {
            self.status.request_outstanding();
            return;
        }
        let username = self.login.username.clone();
        let password = self.login.password.clone();
        let client = self.client.clone();
        let tx = self.net_tx.clone();
        self.handle.spawn(async move {
            let result = client.sign_in(&username, &password).await;
            let _ = tx.send(NetEvent::SignedIn(result));
        });
        self.status.signing_in();
    }

    fn request_refresh(&mut self) {
        if !self.store.begin(Pending::Refresh) {
            self.status.request_outstanding();
            return;
        }
        let client = self.client.clone();
        let tx = self.net_tx.clone();
        self.handle.spawn(async move {
            let result = client.fetch_products().await;
            let _ = tx.send(NetEvent::ListLoaded(result));
        });
        self.status.refreshing();
    }

    fn confirm_modal(&mut self) {
        match self.modal.mode() {
            Some(ModalMode::Create) | Some(ModalMode::Edit) => self.submit_save(),
            Some(ModalMode::Delete) => self.submit_delete(),
            _ => {}
        }
    }

    fn submit_save(&mut self) {
        let Some(mode) = self.modal.mode() else {
            return;
        };
        let session = self.modal.session();
        if !self.store.begin(Pending::Save(session)) {
            self.status.request_outstanding();
            return;
        }
        let payload = self.modal.draft().to_payload();
        let id = self.modal.draft().id.clone();
        let client = self.client.clone();
        let tx = self.net_tx.clone();
        self.handle.spawn(async move {
            let result = if mode == ModalMode::Edit {
                client.update_product(&id, &payload).await
            } else {
                client.create_product(&payload).await
            };
            let _ = tx.send(NetEvent::Saved { session, result });
        });
        self.status.saving();
    }

    fn submit_delete(&mut self) {
        let session = self.modal.session();
        if !self.store.begin(Pending::Delete(session)) {
            self.status.request_outstanding();
            return;
        }
        let id = self.modal.draft().id.clone();
        let client = self.client.clone();
        let tx = self.net_tx.clone();
        self.handle.spawn(async move {
            let result = client.delete_product(&id).await;
            let _ = tx.send(NetEvent::Deleted { session, result });
        });
        self.status.deleting();
    }

    fn drain_net_events(&mut self) {
        while let Ok(event) = self.net_rx.try_recv() {
            self.on_net_event(event);
        }
    }

    fn on_net_event(&mut self, event: NetEvent) {
        let current = self.modal.session();
        match &event {
            NetEvent::SessionChecked(Ok(())) => self.status.signed_in(),
            NetEvent::SessionChecked(Err(_)) => self.status.sign_in_required(),
            NetEvent::SignedIn(Ok(_)) => self.status.signed_in(),
            NetEvent::ListLoaded(Ok(products)) => self.status.list_loaded(products.len()),
            NetEvent::Saved { session, result } if *session == current && result.is_ok() => {
                self.status.saved()
            }
            NetEvent::Deleted { session, result } if *session == current && result.is_ok() => {
                self.status.deleted()
            }
            _ => {}
        }
        for effect in self.store.apply(event, current) {
            self.run_effect(effect);
        }
        self.clamp_selection();
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::RefreshList => {
                if self.store.begin(Pending::Refresh) {
                    let client = self.client.clone();
                    let tx = self.net_tx.clone();
                    self.handle.spawn(async move {
                        let result = client.fetch_products().await;
                        let _ = tx.send(NetEvent::ListLoaded(result));
                    });
                }
            }
            Effect::CloseModal => self.modal.close(),
            Effect::PersistCredentials(credentials) => {
                if let Err(err) = self.credentials.save(&credentials) {
                    warn!(error = %err, "could not persist credentials");
                }
            }
            Effect::ClearCredentials => {
                self.client.clear_token();
                if let Err(err) = self.credentials.clear() {
                    warn!(error = %err, "could not clear credentials");
                }
            }
            Effect::Notify(message) => self.status.set_raw(message),
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.products().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
