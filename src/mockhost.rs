//! An in-memory host runtime with a deterministic document model.
//!
//! Implements [`HostEnv`] over a small object table that mimics the
//! platform surface the wrappers bind to: the same class names, operation
//! names, and signatures, and the same fault behavior (missing assets and
//! out-of-range page indices raise host faults that pass through the
//! wrapper layer unmodified). Pixel content is a deterministic function of
//! position and page index, which makes golden tests and benches stable.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::host::{Arg, HostEnv};
use crate::{Error, Result};

/// Point size of one synthetic page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub width_pts: i32,
    pub height_pts: i32,
}

impl PageSpec {
    /// US letter, 612x792 points.
    pub const LETTER: PageSpec = PageSpec {
        width_pts: 612,
        height_pts: 792,
    };

    /// ISO A4, 595x842 points.
    pub const A4: PageSpec = PageSpec {
        width_pts: 595,
        height_pts: 842,
    };
}

/// Borrowed reference into the mock object table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockObject(usize);

/// Resolved mock class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockClass(ClassKind);

/// Cached mock instance-method identifier.
#[derive(Debug, Clone, Copy)]
pub struct MockMethod(Selector);

/// Cached mock static-method identifier.
#[derive(Debug, Clone, Copy)]
pub struct MockStaticMethod(StaticSelector);

/// Cached mock static-field identifier.
#[derive(Debug, Clone, Copy)]
pub struct MockField(FieldKind);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassKind {
    Context,
    Resolver,
    Descriptor,
    Renderer,
    Page,
    Bitmap,
    BitmapConfig,
}

#[derive(Debug, Clone, Copy)]
enum Selector {
    GetContentResolver,
    OpenFileDescriptor,
    GetFd,
    RendererCtor,
    GetPageCount,
    OpenPage,
    PageRender,
    PageGetWidth,
    PageGetHeight,
    BitmapGetWidth,
    BitmapGetHeight,
    BitmapGetConfig,
    BitmapGetPixels,
}

#[derive(Debug, Clone, Copy)]
enum StaticSelector {
    CreateBitmap,
}

#[derive(Debug, Clone, Copy)]
enum FieldKind {
    Argb8888,
}

enum Obj {
    Activity,
    Config,
    Resolver,
    Descriptor { fd: i32, uri: String },
    Renderer { uri: String },
    Page { uri: String, index: usize },
    Bitmap { width: i32, height: i32, pixels: Vec<i32> },
    Str(String),
    IntArray(Vec<i32>),
}

struct State {
    objects: Vec<Obj>,
    assets: HashMap<String, Vec<PageSpec>>,
}

/// In-memory host runtime.
///
/// Single-threaded by design, matching the call-and-return model of the
/// real host: every wrapper is constructed and consumed within one call
/// chain on one thread.
pub struct MockHost {
    state: RefCell<State>,
    lookups: Cell<u64>,
}

impl MockHost {
    pub fn new() -> Self {
        MockHost {
            state: RefCell::new(State {
                // slot 0 is the activity handed to the entry point,
                // slot 1 the ARGB_8888 config singleton
                objects: vec![Obj::Activity, Obj::Config],
                assets: HashMap::new(),
            }),
            lookups: Cell::new(0),
        }
    }

    /// Make a document reachable under `uri`, one entry per page.
    pub fn register_asset(&self, uri: &str, pages: Vec<PageSpec>) {
        self.state.borrow_mut().assets.insert(uri.to_string(), pages);
    }

    /// The context object the host hands to the native entry point.
    pub fn activity(&self) -> MockObject {
        MockObject(0)
    }

    /// Number of class/method/field lookups performed so far. Eagerly bound
    /// wrappers stop adding to this once constructed.
    pub fn lookup_count(&self) -> u64 {
        self.lookups.get()
    }

    fn alloc(&self, obj: Obj) -> MockObject {
        let mut state = self.state.borrow_mut();
        state.objects.push(obj);
        MockObject(state.objects.len() - 1)
    }

    fn string_at(&self, obj: MockObject) -> Result<String> {
        match self.state.borrow().objects.get(obj.0) {
            Some(Obj::Str(s)) => Ok(s.clone()),
            _ => Err(bad_receiver("string argument")),
        }
    }

    fn count_lookup(&self) {
        self.lookups.set(self.lookups.get() + 1);
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic ARGB fill for one pixel of a rendered page.
fn shade(x: u32, y: u32, page: u32) -> i32 {
    let r = x % 251;
    let g = y % 241;
    let b = (x ^ y).wrapping_add(page.wrapping_mul(31)) & 0xff;
    (0xff00_0000u32 | (r << 16) | (g << 8) | b) as i32
}

fn bad_receiver(what: &str) -> Error {
    Error::HostFault(format!("invalid receiver for {}", what))
}

fn int_arg(args: &[Arg<MockObject>], index: usize) -> Result<i32> {
    match args.get(index) {
        Some(Arg::Int(v)) => Ok(*v),
        _ => Err(Error::HostFault(format!("argument {} is not an int", index))),
    }
}

fn obj_arg(args: &[Arg<MockObject>], index: usize) -> Result<MockObject> {
    match args.get(index) {
        Some(Arg::Object(o)) => Ok(*o),
        _ => Err(Error::HostFault(format!(
            "argument {} is not an object",
            index
        ))),
    }
}

impl HostEnv for MockHost {
    type Class = MockClass;
    type Method = MockMethod;
    type StaticMethod = MockStaticMethod;
    type Field = MockField;
    type Object = MockObject;

    fn find_class(&self, name: &str) -> Option<MockClass> {
        self.count_lookup();
        let kind = match name {
            "android/content/Context" => ClassKind::Context,
            "android/content/ContentResolver" => ClassKind::Resolver,
            "android/os/ParcelFileDescriptor" => ClassKind::Descriptor,
            "android/graphics/pdf/PdfRenderer" => ClassKind::Renderer,
            "android/graphics/pdf/PdfRenderer$Page" => ClassKind::Page,
            "android/graphics/Bitmap" => ClassKind::Bitmap,
            "android/graphics/Bitmap$Config" => ClassKind::BitmapConfig,
            _ => return None,
        };
        Some(MockClass(kind))
    }

    fn method_id(&self, class: MockClass, name: &str, sig: &str) -> Option<MockMethod> {
        self.count_lookup();
        let selector = match (class.0, name, sig) {
            (ClassKind::Context, "getContentResolver", "()Landroid/content/ContentResolver;") => {
                Selector::GetContentResolver
            }
            (
                ClassKind::Resolver,
                "openFileDescriptor",
                "(Landroid/net/Uri;Ljava/lang/String;)Landroid/os/ParcelFileDescriptor;",
            ) => Selector::OpenFileDescriptor,
            (ClassKind::Descriptor, "getFd", "()I") => Selector::GetFd,
            (ClassKind::Renderer, "<init>", "(Landroid/os/ParcelFileDescriptor;)V") => {
                Selector::RendererCtor
            }
            (ClassKind::Renderer, "getPageCount", "()I") => Selector::GetPageCount,
            (ClassKind::Renderer, "openPage", "(I)Landroid/graphics/pdf/PdfRenderer$Page;") => {
                Selector::OpenPage
            }
            (
                ClassKind::Page,
                "render",
                "(Landroid/graphics/Bitmap;Landroid/graphics/Rect;Landroid/graphics/pdf/PdfRenderer$Page$RenderMode;)V",
            ) => Selector::PageRender,
            (ClassKind::Page, "getWidth", "()I") => Selector::PageGetWidth,
            (ClassKind::Page, "getHeight", "()I") => Selector::PageGetHeight,
            (ClassKind::Bitmap, "getWidth", "()I") => Selector::BitmapGetWidth,
            (ClassKind::Bitmap, "getHeight", "()I") => Selector::BitmapGetHeight,
            (ClassKind::Bitmap, "getConfig", "()Landroid/graphics/Bitmap$Config;") => {
                Selector::BitmapGetConfig
            }
            (ClassKind::Bitmap, "getPixels", "([IIIIIII)V") => Selector::BitmapGetPixels,
            _ => return None,
        };
        Some(MockMethod(selector))
    }

    fn static_method_id(&self, class: MockClass, name: &str, sig: &str) -> Option<MockStaticMethod> {
        self.count_lookup();
        match (class.0, name, sig) {
            (
                ClassKind::Bitmap,
                "createBitmap",
                "(IILandroid/graphics/Bitmap$Config;)Landroid/graphics/Bitmap;",
            ) => Some(MockStaticMethod(StaticSelector::CreateBitmap)),
            _ => None,
        }
    }

    fn static_field_id(&self, class: MockClass, name: &str, sig: &str) -> Option<MockField> {
        self.count_lookup();
        match (class.0, name, sig) {
            (ClassKind::BitmapConfig, "ARGB_8888", "Landroid/graphics/Bitmap$Config;") => {
                Some(MockField(FieldKind::Argb8888))
            }
            _ => None,
        }
    }

    fn call_int(&self, recv: MockObject, method: MockMethod, _args: &[Arg<MockObject>]) -> Result<i32> {
        let state = self.state.borrow();
        match (method.0, state.objects.get(recv.0)) {
            (Selector::GetFd, Some(Obj::Descriptor { fd, .. })) => Ok(*fd),
            (Selector::GetPageCount, Some(Obj::Renderer { uri })) => {
                let pages = state.assets.get(uri).map(Vec::len).unwrap_or(0);
                Ok(pages as i32)
            }
            (Selector::PageGetWidth, Some(Obj::Page { uri, index })) => state
                .assets
                .get(uri)
                .and_then(|pages| pages.get(*index))
                .map(|p| p.width_pts)
                .ok_or_else(|| bad_receiver("getWidth")),
            (Selector::PageGetHeight, Some(Obj::Page { uri, index })) => state
                .assets
                .get(uri)
                .and_then(|pages| pages.get(*index))
                .map(|p| p.height_pts)
                .ok_or_else(|| bad_receiver("getHeight")),
            (Selector::BitmapGetWidth, Some(Obj::Bitmap { width, .. })) => Ok(*width),
            (Selector::BitmapGetHeight, Some(Obj::Bitmap { height, .. })) => Ok(*height),
            (selector, _) => Err(bad_receiver(&format!("{:?}", selector))),
        }
    }

    fn call_void(&self, recv: MockObject, method: MockMethod, args: &[Arg<MockObject>]) -> Result<()> {
        match method.0 {
            Selector::PageRender => {
                let bitmap = obj_arg(args, 0)?;
                let mut state = self.state.borrow_mut();
                let page_index = match state.objects.get(recv.0) {
                    Some(Obj::Page { index, .. }) => *index,
                    _ => return Err(bad_receiver("render")),
                };
                match state.objects.get_mut(bitmap.0) {
                    Some(Obj::Bitmap {
                        width,
                        height,
                        pixels,
                    }) => {
                        let (w, h) = (*width as u32, *height as u32);
                        for y in 0..h {
                            for x in 0..w {
                                pixels[(y * w + x) as usize] = shade(x, y, page_index as u32);
                            }
                        }
                        Ok(())
                    }
                    _ => Err(bad_receiver("render destination")),
                }
            }
            Selector::BitmapGetPixels => {
                let array = obj_arg(args, 0)?;
                let w = int_arg(args, 5)?;
                let h = int_arg(args, 6)?;
                let count = (w as usize) * (h as usize);
                let mut state = self.state.borrow_mut();
                let src = match state.objects.get(recv.0) {
                    Some(Obj::Bitmap { pixels, .. }) => pixels.clone(),
                    _ => return Err(bad_receiver("getPixels")),
                };
                if count > src.len() {
                    return Err(Error::HostFault(
                        "java.lang.ArrayIndexOutOfBoundsException".to_string(),
                    ));
                }
                match state.objects.get_mut(array.0) {
                    Some(Obj::IntArray(buf)) if buf.len() >= count => {
                        buf[..count].copy_from_slice(&src[..count]);
                        Ok(())
                    }
                    Some(Obj::IntArray(_)) => Err(Error::HostFault(
                        "java.lang.ArrayIndexOutOfBoundsException".to_string(),
                    )),
                    _ => Err(bad_receiver("pixel array")),
                }
            }
            selector => Err(bad_receiver(&format!("{:?}", selector))),
        }
    }

    fn call_object(
        &self,
        recv: MockObject,
        method: MockMethod,
        args: &[Arg<MockObject>],
    ) -> Result<MockObject> {
        match method.0 {
            Selector::GetContentResolver => {
                match self.state.borrow().objects.get(recv.0) {
                    Some(Obj::Activity) => {}
                    _ => return Err(bad_receiver("getContentResolver")),
                }
                Ok(self.alloc(Obj::Resolver))
            }
            Selector::OpenFileDescriptor => {
                match self.state.borrow().objects.get(recv.0) {
                    Some(Obj::Resolver) => {}
                    _ => return Err(bad_receiver("openFileDescriptor")),
                }
                let uri = self.string_at(obj_arg(args, 0)?)?;
                // the mode argument is accepted as-is, like the host does
                let _mode = self.string_at(obj_arg(args, 1)?)?;
                if !self.state.borrow().assets.contains_key(&uri) {
                    return Err(Error::HostFault(format!(
                        "java.io.FileNotFoundException: {}",
                        uri
                    )));
                }
                let fd = 40 + self.state.borrow().objects.len() as i32;
                Ok(self.alloc(Obj::Descriptor { fd, uri }))
            }
            Selector::OpenPage => {
                let index = int_arg(args, 0)?;
                let (uri, count) = {
                    let state = self.state.borrow();
                    match state.objects.get(recv.0) {
                        Some(Obj::Renderer { uri }) => {
                            let count = state.assets.get(uri).map(Vec::len).unwrap_or(0);
                            (uri.clone(), count)
                        }
                        _ => return Err(bad_receiver("openPage")),
                    }
                };
                if index < 0 || index as usize >= count {
                    return Err(Error::HostFault(format!("Invalid page index: {}", index)));
                }
                Ok(self.alloc(Obj::Page {
                    uri,
                    index: index as usize,
                }))
            }
            Selector::BitmapGetConfig => match self.state.borrow().objects.get(recv.0) {
                Some(Obj::Bitmap { .. }) => Ok(MockObject(1)),
                _ => Err(bad_receiver("getConfig")),
            },
            selector => Err(bad_receiver(&format!("{:?}", selector))),
        }
    }

    fn call_static_object(
        &self,
        _class: MockClass,
        method: MockStaticMethod,
        args: &[Arg<MockObject>],
    ) -> Result<MockObject> {
        match method.0 {
            StaticSelector::CreateBitmap => {
                let width = int_arg(args, 0)?;
                let height = int_arg(args, 1)?;
                match self.state.borrow().objects.get(obj_arg(args, 2)?.0) {
                    Some(Obj::Config) => {}
                    _ => return Err(bad_receiver("createBitmap config")),
                }
                if width <= 0 || height <= 0 {
                    return Err(Error::HostFault(
                        "width and height must be > 0".to_string(),
                    ));
                }
                let pixels = vec![0; (width as usize) * (height as usize)];
                Ok(self.alloc(Obj::Bitmap {
                    width,
                    height,
                    pixels,
                }))
            }
        }
    }

    fn static_object_field(&self, _class: MockClass, field: MockField) -> Result<MockObject> {
        match field.0 {
            FieldKind::Argb8888 => Ok(MockObject(1)),
        }
    }

    fn new_object(
        &self,
        _class: MockClass,
        ctor: MockMethod,
        args: &[Arg<MockObject>],
    ) -> Result<MockObject> {
        match ctor.0 {
            Selector::RendererCtor => {
                let uri = match self.state.borrow().objects.get(obj_arg(args, 0)?.0) {
                    Some(Obj::Descriptor { uri, .. }) => uri.clone(),
                    _ => return Err(bad_receiver("PdfRenderer constructor")),
                };
                Ok(self.alloc(Obj::Renderer { uri }))
            }
            selector => Err(bad_receiver(&format!("{:?}", selector))),
        }
    }

    fn new_string(&self, value: &str) -> Result<MockObject> {
        Ok(self.alloc(Obj::Str(value.to_string())))
    }

    fn new_int_array(&self, len: i32) -> Result<MockObject> {
        if len < 0 {
            return Err(Error::HostFault(
                "java.lang.NegativeArraySizeException".to_string(),
            ));
        }
        Ok(self.alloc(Obj::IntArray(vec![0; len as usize])))
    }

    fn int_array_region(&self, array: MockObject, buf: &mut [i32]) -> Result<()> {
        match self.state.borrow().objects.get(array.0) {
            Some(Obj::IntArray(values)) if values.len() >= buf.len() => {
                buf.copy_from_slice(&values[..buf.len()]);
                Ok(())
            }
            Some(Obj::IntArray(_)) => Err(Error::HostFault(
                "java.lang.ArrayIndexOutOfBoundsException".to_string(),
            )),
            _ => Err(bad_receiver("int array")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_class_is_not_found() {
        let host = MockHost::new();
        assert!(host.find_class("android/graphics/pdf/LosslessRenderer").is_none());
    }

    #[test]
    fn missing_asset_raises_file_not_found() {
        let host = MockHost::new();
        let resolver = host
            .find_class("android/content/ContentResolver")
            .and_then(|c| {
                host.method_id(
                    c,
                    "openFileDescriptor",
                    "(Landroid/net/Uri;Ljava/lang/String;)Landroid/os/ParcelFileDescriptor;",
                )
            })
            .unwrap();
        let resolver_obj = host.call_object(
            host.activity(),
            host.method_id(
                host.find_class("android/content/Context").unwrap(),
                "getContentResolver",
                "()Landroid/content/ContentResolver;",
            )
            .unwrap(),
            &[],
        )
        .unwrap();
        let uri = host.new_string("file:///android_asset/absent.pdf").unwrap();
        let mode = host.new_string("r").unwrap();
        let err = host
            .call_object(resolver_obj, resolver, &[Arg::Object(uri), Arg::Object(mode)])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "host fault: java.io.FileNotFoundException: file:///android_asset/absent.pdf"
        );
    }

    #[test]
    fn shade_is_deterministic() {
        assert_eq!(shade(3, 7, 0), shade(3, 7, 0));
        assert_ne!(shade(3, 7, 0), shade(3, 7, 1));
    }
}
