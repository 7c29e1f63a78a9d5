use std::{
    collections::HashMap,
    fs::{self, FileType},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    error::DictionaryError,
    parser::parse_dictionary,
    types::{Application, Avp, AvpKey},
};

/// Position of an AVP: (application index, avp index).
type Slot = (usize, usize);

/// All loaded applications plus the indexes behind the AVP lookups.
///
/// Applications keep their load order. Loading an application id that is
/// already present extends the existing application. Every index keeps the
/// first AVP registered under a key, so lookups never depend on hash order.
#[derive(Debug, Default)]
pub struct Dictionary {
    apps:      Vec<Application>,
    app_index: HashMap<u32, usize>,
    exact:     HashMap<(u32, AvpKey, u32), Slot>,
    loose:     HashMap<(u32, AvpKey), Slot>,
    global:    HashMap<AvpKey, Slot>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applications in load order.
    pub fn apps(&self) -> &[Application] {
        &self.apps
    }

    pub fn app(&self, id: u32) -> Option<&Application> {
        self.app_index.get(&id).map(|&i| &self.apps[i])
    }

    pub fn load_str(&mut self, text: &str) -> Result<(), DictionaryError> {
        self.load_named(text, "<memory>")
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DictionaryError> {
        let path = path.as_ref();
        info!("Loading dictionary {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_named(&text, &path.display().to_string())
    }

    /// Load every `.xml` file below `dir`, visiting entries in sorted path order.
    /// Symlinked directories are not followed.
    pub fn load_dir<P: AsRef<Path>>(&mut self, dir: P) -> Result<(), DictionaryError> {
        let dir = dir.as_ref();
        info!("Loading dictionaries from {}", dir.display());
        for (path, file_type) in sorted_entries(dir)? {
            if file_type.is_dir() {
                self.load_dir(&path)?;
            } else if file_type.is_symlink() && path.is_dir() {
                debug!("Skipping symlinked directory {}", path.display());
            } else if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("xml")) {
                self.load_file(&path)?;
            } else {
                debug!("Skipping {}", path.display());
            }
        }
        Ok(())
    }

    /// Load a mix of dictionary files and directories, in the given order.
    pub fn load_paths<I, P>(&mut self, paths: I) -> Result<(), DictionaryError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            let path = path.as_ref();
            if path.is_dir() {
                self.load_dir(path)?;
            } else {
                self.load_file(path)?;
            }
        }
        Ok(())
    }

    fn load_named(&mut self, text: &str, origin: &str) -> Result<(), DictionaryError> {
        for app in parse_dictionary(text, origin)? {
            debug!(
                "Loaded application {} ({}) with {} commands and {} AVPs from {}",
                app.id,
                app.name,
                app.commands.len(),
                app.avps.len(),
                origin
            );
            self.add_application(app);
        }
        Ok(())
    }

    fn add_application(&mut self, app: Application) {
        let app_idx = match self.app_index.get(&app.id) {
            Some(&idx) => idx,
            None => {
                self.apps.push(Application {
                    id:       app.id,
                    kind:     app.kind.clone(),
                    name:     app.name.clone(),
                    vendors:  Vec::new(),
                    commands: Vec::new(),
                    avps:     Vec::new(),
                });
                self.app_index.insert(app.id, self.apps.len() - 1);
                self.apps.len() - 1
            }
        };

        let Application { id, vendors, commands, avps, .. } = app;
        let target = &mut self.apps[app_idx];
        for vendor in vendors {
            if !target.vendors.contains(&vendor) {
                target.vendors.push(vendor);
            }
        }
        target.commands.extend(commands);

        for avp in avps {
            let slot = (app_idx, self.apps[app_idx].avps.len());
            for key in [AvpKey::Name(avp.name.clone()), AvpKey::Code(avp.code)] {
                self.exact.entry((id, key.clone(), avp.vendor_id)).or_insert(slot);
                self.loose.entry((id, key.clone())).or_insert(slot);
                self.global.entry(key).or_insert(slot);
            }
            self.apps[app_idx].avps.push(avp);
        }
    }

    fn at(&self, (app, avp): Slot) -> &Avp {
        &self.apps[app].avps[avp]
    }

    /// AVP with this key and vendor in application `app_id`, falling back to
    /// the base application (id 0).
    pub fn find_avp_with_vendor(&self, app_id: u32, key: &AvpKey, vendor_id: u32) -> Option<&Avp> {
        match self.exact.get(&(app_id, key.clone(), vendor_id)) {
            Some(&slot) => Some(self.at(slot)),
            None if app_id != 0 => self.find_avp_with_vendor(0, key, vendor_id),
            None => None,
        }
    }

    /// First AVP with this key in application `app_id` whatever its vendor,
    /// falling back to the base application (id 0).
    pub fn find_avp(&self, app_id: u32, key: &AvpKey) -> Option<&Avp> {
        match self.loose.get(&(app_id, key.clone())) {
            Some(&slot) => Some(self.at(slot)),
            None if app_id != 0 => self.find_avp(0, key),
            None => None,
        }
    }

    /// First AVP with this key in any loaded application, in load order.
    pub fn scan_avp(&self, key: &AvpKey) -> Option<&Avp> {
        self.global.get(key).map(|&slot| self.at(slot))
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<(PathBuf, FileType)>, DictionaryError> {
    let io_err = |source| DictionaryError::Io { path: dir.to_path_buf(), source };
    let mut entries = fs::read_dir(dir)
        .map_err(io_err)?
        .map(|entry| entry.and_then(|e| Ok((e.path(), e.file_type()?))))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)?;
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}
