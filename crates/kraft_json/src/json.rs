use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;
use core::any::{Any, TypeId};
use core::cell::RefCell;
use core::mem::ManuallyDrop;
use std::sync::{OnceLock, PoisonError, RwLock};

use serde_core::de::DeserializeSeed;

use kraft_reflect::info::{TypeInfo, Typed};
use kraft_utils::TypeIdMap;

use crate::adapter::{AdapterSeed, Encoded, TypeAdapter, TypeAdapterFactory};
use crate::builtin::{
    CodecAdapterFactory, ListAdapterFactory, OptionAdapterFactory, StructuralAdapterFactory,
};
use crate::constructor::ConstructorAdapterFactory;
use crate::error::{AdapterError, JsonError, clear_stashed, stash, take_stashed};

// -----------------------------------------------------------------------------
// FutureAdapter

/// Stands in for an adapter that is still being built on this thread.
///
/// Handed out when a type refers to itself. It is resolved once the
/// outermost build publishes its adapters.
struct FutureAdapter {
    type_path: &'static str,
    target: OnceLock<Weak<dyn TypeAdapter>>,
}

impl FutureAdapter {
    fn target(&self) -> Result<Arc<dyn TypeAdapter>, AdapterError> {
        self.target
            .get()
            .and_then(Weak::upgrade)
            .ok_or(AdapterError::MissingAdapter(self.type_path))
    }
}

impl TypeAdapter for FutureAdapter {
    fn check_read(&self) -> Result<(), AdapterError> {
        self.target()?.check_read()
    }

    fn read(
        &self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<Option<Box<dyn Any>>, erased_serde::Error> {
        self.target().map_err(stash::<erased_serde::Error>)?.read(deserializer)
    }

    fn write<'a>(&self, value: Option<&'a dyn Any>) -> Result<Encoded<'a>, AdapterError> {
        self.target()?.write(value)
    }
}

// -----------------------------------------------------------------------------
// Build sessions

/// The adapters one thread is building for one registry.
///
/// Adapters are only published to the cache when the outermost request
/// succeeds, so that a failed build leaves no adapter behind that waits on
/// an unresolved future.
struct BuildSession {
    registry: usize,
    building: Vec<TypeId>,
    futures: Vec<(TypeId, Arc<FutureAdapter>)>,
    built: Vec<(TypeId, &'static str, Arc<dyn TypeAdapter>)>,
}

impl BuildSession {
    fn new(registry: usize) -> Self {
        Self {
            registry,
            building: Vec::new(),
            futures: Vec::new(),
            built: Vec::new(),
        }
    }

    fn future(&mut self, type_id: TypeId, type_path: &'static str) -> Arc<dyn TypeAdapter> {
        if let Some((_, future)) = self.futures.iter().find(|(id, _)| *id == type_id) {
            return future.clone();
        }
        let future = Arc::new(FutureAdapter {
            type_path,
            target: OnceLock::new(),
        });
        self.futures.push((type_id, future.clone()));
        future
    }
}

std::thread_local! {
    static SESSIONS: RefCell<Vec<BuildSession>> = const { RefCell::new(Vec::new()) };
}

enum Lookup {
    Found(Arc<dyn TypeAdapter>),
    Build { outermost: bool },
}

/// One type being built within a session.
///
/// Dropped without [`finish`](Self::finish) when a factory panics, which
/// still leaves the session, so no later lookup waits on the abandoned type.
struct BuildStep {
    registry: usize,
    type_id: TypeId,
    outermost: bool,
}

impl BuildStep {
    /// Records the built adapter, returning the session if this step was
    /// the outermost one.
    fn finish(self, built: Option<(&'static str, Arc<dyn TypeAdapter>)>) -> Option<BuildSession> {
        let step = ManuallyDrop::new(self);
        step.leave(built)
    }

    fn leave(&self, built: Option<(&'static str, Arc<dyn TypeAdapter>)>) -> Option<BuildSession> {
        SESSIONS
            .try_with(|sessions| {
                let mut sessions = sessions.try_borrow_mut().ok()?;
                let index = sessions.iter().position(|s| s.registry == self.registry)?;
                let session = &mut sessions[index];
                session.building.retain(|id| *id != self.type_id);
                if let Some((type_path, adapter)) = built {
                    session.built.push((self.type_id, type_path, adapter));
                }
                self.outermost.then(|| sessions.swap_remove(index))
            })
            .ok()
            .flatten()
    }
}

impl Drop for BuildStep {
    fn drop(&mut self) {
        self.leave(None);
    }
}

// -----------------------------------------------------------------------------
// Json

/// The adapter registry.
///
/// Adapters are created on first use by asking each factory in order, and
/// cached for the lifetime of the registry. User factories come first,
/// followed by the built-in adapters, see [`builtin`](crate::builtin).
///
/// # Examples
///
/// ```
/// use kraft_json::Json;
/// use kraft_reflect::derive::Reflect;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct User {
///     #[reflect(rename = "user_name")]
///     name: String,
///     #[reflect(default = 18)]
///     age: u32,
/// }
///
/// let json = Json::new();
/// let user: User = json.from_str(r#"{"user_name":"kraft"}"#).unwrap().unwrap();
/// assert_eq!(user, User { name: "kraft".into(), age: 18 });
///
/// assert_eq!(json.to_string(&user).unwrap(), r#"{"user_name":"kraft","age":18}"#);
/// ```
pub struct Json {
    factories: Vec<Arc<dyn TypeAdapterFactory>>,
    cache: RwLock<TypeIdMap<Arc<dyn TypeAdapter>>>,
    serialize_nulls: bool,
    pretty: bool,
}

impl Json {
    /// A registry with constructor adapters, without default primitive values.
    pub fn new() -> Self {
        JsonBuilder::new().with_constructor_adapters(false).build()
    }

    /// Starts an empty configuration.
    #[inline]
    pub fn builder() -> JsonBuilder {
        JsonBuilder::new()
    }

    /// Returns `true` if null fields are written.
    #[inline]
    pub fn serializes_nulls(&self) -> bool {
        self.serialize_nulls
    }

    #[inline]
    fn registry_id(&self) -> usize {
        core::ptr::from_ref(self).addr()
    }

    fn cached(&self, type_id: TypeId) -> Option<Arc<dyn TypeAdapter>> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache.get(&type_id).cloned()
    }

    fn create_with<'a>(
        &self,
        factories: impl IntoIterator<Item = &'a Arc<dyn TypeAdapterFactory>>,
        info: &'static TypeInfo,
    ) -> Result<Arc<dyn TypeAdapter>, AdapterError> {
        for factory in factories {
            if let Some(adapter) = factory.create(self, info)? {
                return Ok(adapter);
            }
        }
        Err(AdapterError::MissingAdapter(info.type_path()))
    }

    /// Returns the adapter for `info`, creating it on first use.
    ///
    /// A type that refers to itself, directly or through other types,
    /// receives a placeholder while its adapter is being built.
    pub fn get_adapter(&self, info: &'static TypeInfo) -> Result<Arc<dyn TypeAdapter>, AdapterError> {
        let type_id = info.type_id();
        if let Some(adapter) = self.cached(type_id) {
            log::trace!("adapter cache hit for `{}`", info.type_path());
            return Ok(adapter);
        }

        let registry = self.registry_id();
        let lookup = SESSIONS.with_borrow_mut(|sessions| {
            let Some(session) = sessions.iter_mut().find(|s| s.registry == registry) else {
                let mut session = BuildSession::new(registry);
                session.building.push(type_id);
                sessions.push(session);
                return Lookup::Build { outermost: true };
            };
            if let Some((_, _, adapter)) = session.built.iter().find(|(id, ..)| *id == type_id) {
                return Lookup::Found(adapter.clone());
            }
            if session.building.contains(&type_id) {
                return Lookup::Found(session.future(type_id, info.type_path()));
            }
            session.building.push(type_id);
            Lookup::Build { outermost: false }
        });

        let outermost = match lookup {
            Lookup::Found(adapter) => return Ok(adapter),
            Lookup::Build { outermost } => outermost,
        };

        let step = BuildStep {
            registry,
            type_id,
            outermost,
        };
        let result = self.create_with(&self.factories, info);
        let finished = step.finish(
            result
                .as_ref()
                .ok()
                .map(|adapter| (info.type_path(), adapter.clone())),
        );

        let adapter = result?;
        match finished {
            Some(session) => Ok(self.publish(session, type_id, adapter)),
            None => Ok(adapter),
        }
    }

    /// Caches the adapters of a finished session and resolves its futures.
    ///
    /// The first adapter cached for a type wins, an adapter built
    /// concurrently by another thread is kept instead of ours.
    fn publish(
        &self,
        session: BuildSession,
        type_id: TypeId,
        adapter: Arc<dyn TypeAdapter>,
    ) -> Arc<dyn TypeAdapter> {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);

        for (id, type_path, built) in session.built {
            let cached = cache.get_or_insert(id, || built.clone());
            if !Arc::ptr_eq(cached, &built) {
                log::warn!("discarding an adapter for `{type_path}` built concurrently");
            }
        }

        for (id, future) in session.futures {
            if let Some(target) = cache.get(&id) {
                let _ = future.target.set(Arc::downgrade(target));
            }
        }

        cache.get(&type_id).cloned().unwrap_or(adapter)
    }

    /// Returns the adapter the factories after `skip_past` create for `info`.
    ///
    /// Lets a factory wrap the adapter it would otherwise shadow. The result
    /// is not cached. If `skip_past` is not registered, every factory is asked.
    pub fn get_delegate_adapter(
        &self,
        skip_past: &dyn TypeAdapterFactory,
        info: &'static TypeInfo,
    ) -> Result<Arc<dyn TypeAdapter>, AdapterError> {
        let position = self
            .factories
            .iter()
            .position(|factory| core::ptr::addr_eq(Arc::as_ptr(factory), skip_past));

        match position {
            Some(index) => self.create_with(&self.factories[index + 1..], info),
            None => self.create_with(&self.factories, info),
        }
    }

    /// Builds the adapters of `infos` ahead of their first use.
    pub fn warm_caches(&self, infos: &[&'static TypeInfo]) -> Result<(), AdapterError> {
        for &info in infos {
            self.get_adapter(info)?;
        }
        Ok(())
    }

    /// Builds the adapters of every `#[reflect(auto_register)]` type,
    /// returning how many types were warmed.
    #[cfg(feature = "auto_register")]
    pub fn warm_registered(&self) -> Result<usize, AdapterError> {
        let mut count = 0;
        for info in kraft_reflect::registry::registered_types() {
            self.get_adapter(info)?;
            count += 1;
        }
        Ok(count)
    }

    /// Reads a `T` from a JSON string, `Ok(None)` stands for `null`.
    pub fn from_str<T: Typed>(&self, input: &str) -> Result<Option<T>, JsonError> {
        clear_stashed();

        let adapter = self.get_adapter(T::type_info())?;
        adapter.check_read()?;

        let mut deserializer = serde_json::Deserializer::from_str(input);
        let value = AdapterSeed(&*adapter)
            .deserialize(&mut deserializer)
            .map_err(|err| match take_stashed() {
                Some(adapter_err) => JsonError::Adapter(adapter_err),
                None => JsonError::Json(err),
            })?;
        deserializer.end()?;

        match value {
            None => Ok(None),
            Some(value) => value
                .downcast::<T>()
                .map(|value| Some(*value))
                .map_err(|_| AdapterError::TypeMismatch { expected: T::type_path() }.into()),
        }
    }

    fn encode<'a, T: Typed>(&self, value: &'a T) -> Result<Encoded<'a>, JsonError> {
        let adapter = self.get_adapter(T::type_info())?;
        Ok(adapter.write(Some(value as &dyn Any))?)
    }

    /// Writes `value` as JSON, pretty printed if configured.
    pub fn to_string<T: Typed>(&self, value: &T) -> Result<String, JsonError> {
        let encoded = self.encode(value)?;
        let output = if self.pretty {
            serde_json::to_string_pretty(&encoded)
        } else {
            serde_json::to_string(&encoded)
        };
        Ok(output?)
    }

    /// Writes `value` as pretty printed JSON.
    pub fn to_string_pretty<T: Typed>(&self, value: &T) -> Result<String, JsonError> {
        let encoded = self.encode(value)?;
        Ok(serde_json::to_string_pretty(&encoded)?)
    }

    /// Writes `value` as a [`serde_json::Value`].
    pub fn to_value<T: Typed>(&self, value: &T) -> Result<serde_json::Value, JsonError> {
        let encoded = self.encode(value)?;
        Ok(serde_json::to_value(&encoded)?)
    }
}

impl Default for Json {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// JsonBuilder

/// Configures a [`Json`].
///
/// ```
/// use kraft_json::Json;
///
/// let json = Json::builder()
///     .with_constructor_adapters(true)
///     .serialize_nulls()
///     .pretty_printing()
///     .build();
///
/// assert!(json.serializes_nulls());
/// ```
pub struct JsonBuilder {
    factories: Vec<Arc<dyn TypeAdapterFactory>>,
    serialize_nulls: bool,
    pretty: bool,
}

impl JsonBuilder {
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
            serialize_nulls: false,
            pretty: false,
        }
    }

    /// Adds a factory, asked before the ones registered later and before
    /// the built-in adapters.
    pub fn register_factory(mut self, factory: impl TypeAdapterFactory) -> Self {
        self.factories.push(Arc::new(factory));
        self
    }

    /// Registers a [`ConstructorAdapterFactory`].
    pub fn with_constructor_adapters(self, enable_default_primitive_values: bool) -> Self {
        self.register_factory(ConstructorAdapterFactory::new(enable_default_primitive_values))
    }

    /// Writes null fields instead of omitting them.
    pub fn serialize_nulls(mut self) -> Self {
        self.serialize_nulls = true;
        self
    }

    /// Makes [`Json::to_string`] pretty print.
    pub fn pretty_printing(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn build(self) -> Json {
        let mut factories = self.factories;
        factories.push(Arc::new(CodecAdapterFactory));
        factories.push(Arc::new(OptionAdapterFactory));
        factories.push(Arc::new(ListAdapterFactory));
        factories.push(Arc::new(StructuralAdapterFactory));

        Json {
            factories,
            cache: RwLock::new(TypeIdMap::new()),
            serialize_nulls: self.serialize_nulls,
            pretty: self.pretty,
        }
    }
}

impl Default for JsonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
