//! JNI-backed host environment and the exported native entry point.
//!
//! `JniHost` adapts a real `jni::JNIEnv` to the [`HostEnv`] seam. Handle
//! types are the raw `Copy` identifiers the JNI contract hands out; object
//! references stay local references owned by the host for the duration of
//! the native call, which is exactly the borrow scope the wrappers assume.
//! A failed lookup clears the host's pending exception and surfaces as a
//! typed lookup error through the binding layer; a fault raised by a
//! forwarded call is captured with the host's own description text.

use std::cell::RefCell;

use jni::objects::{JClass, JIntArray, JMethodID, JObject, JStaticFieldID, JStaticMethodID, JString};
use jni::signature::{JavaType, Primitive, ReturnType};
use jni::sys::{jclass, jobject, jstring, jvalue};
use jni::JNIEnv;

use crate::host::{Arg, HostEnv};
use crate::{Error, Result};

/// [`HostEnv`] implementation over a JNI environment.
///
/// Tied to the thread and native-call frame the environment belongs to,
/// like the environment itself.
pub struct JniHost<'local> {
    env: RefCell<JNIEnv<'local>>,
}

impl<'local> JniHost<'local> {
    pub fn new(env: JNIEnv<'local>) -> Self {
        Self {
            env: RefCell::new(env),
        }
    }

    /// Give the environment back, e.g. to build the return value of the
    /// native call after the wrappers are done with it.
    pub fn into_env(self) -> JNIEnv<'local> {
        self.env.into_inner()
    }
}

/// Translate a failed host call into [`Error::HostFault`], preferring the
/// pending exception's own description over the binding-level error.
fn host_fault(env: &mut JNIEnv, err: jni::errors::Error) -> Error {
    if matches!(env.exception_check(), Ok(true)) {
        if let Ok(throwable) = env.exception_occurred() {
            let _ = env.exception_clear();
            let described = env
                .call_method(&throwable, "toString", "()Ljava/lang/String;", &[])
                .and_then(|value| value.l())
                .and_then(|text| env.get_string(&JString::from(text)).map(String::from));
            if let Ok(text) = described {
                return Error::HostFault(text);
            }
        }
    }
    Error::HostFault(err.to_string())
}

fn to_jvalues(args: &[Arg<jobject>]) -> Vec<jvalue> {
    args.iter()
        .map(|arg| match arg {
            Arg::Int(v) => jvalue { i: *v },
            Arg::Object(o) => jvalue { l: *o },
            Arg::Null => jvalue {
                l: std::ptr::null_mut(),
            },
        })
        .collect()
}

impl<'local> HostEnv for JniHost<'local> {
    type Class = jclass;
    type Method = JMethodID;
    type StaticMethod = JStaticMethodID;
    type Field = JStaticFieldID;
    type Object = jobject;

    fn find_class(&self, name: &str) -> Option<jclass> {
        let mut env = self.env.borrow_mut();
        match env.find_class(name) {
            Ok(class) => Some(class.into_raw()),
            Err(_) => {
                // FindClass leaves a ClassNotFoundException pending
                let _ = env.exception_clear();
                None
            }
        }
    }

    fn method_id(&self, class: jclass, name: &str, sig: &str) -> Option<JMethodID> {
        let mut env = self.env.borrow_mut();
        let class: JClass = unsafe { JObject::from_raw(class) }.into();
        match env.get_method_id(class, name, sig) {
            Ok(method) => Some(method),
            Err(_) => {
                let _ = env.exception_clear();
                None
            }
        }
    }

    fn static_method_id(&self, class: jclass, name: &str, sig: &str) -> Option<JStaticMethodID> {
        let mut env = self.env.borrow_mut();
        let class: JClass = unsafe { JObject::from_raw(class) }.into();
        match env.get_static_method_id(class, name, sig) {
            Ok(method) => Some(method),
            Err(_) => {
                let _ = env.exception_clear();
                None
            }
        }
    }

    fn static_field_id(&self, class: jclass, name: &str, sig: &str) -> Option<JStaticFieldID> {
        let mut env = self.env.borrow_mut();
        let class: JClass = unsafe { JObject::from_raw(class) }.into();
        match env.get_static_field_id(class, name, sig) {
            Ok(field) => Some(field),
            Err(_) => {
                let _ = env.exception_clear();
                None
            }
        }
    }

    fn call_int(&self, recv: jobject, method: JMethodID, args: &[Arg<jobject>]) -> Result<i32> {
        let mut env = self.env.borrow_mut();
        let recv = unsafe { JObject::from_raw(recv) };
        let args = to_jvalues(args);
        let value = unsafe {
            env.call_method_unchecked(&recv, method, ReturnType::Primitive(Primitive::Int), &args)
        }
        .map_err(|e| host_fault(&mut env, e))?;
        value.i().map_err(Error::from)
    }

    fn call_void(&self, recv: jobject, method: JMethodID, args: &[Arg<jobject>]) -> Result<()> {
        let mut env = self.env.borrow_mut();
        let recv = unsafe { JObject::from_raw(recv) };
        let args = to_jvalues(args);
        let value = unsafe {
            env.call_method_unchecked(&recv, method, ReturnType::Primitive(Primitive::Void), &args)
        }
        .map_err(|e| host_fault(&mut env, e))?;
        value.v().map_err(Error::from)
    }

    fn call_object(&self, recv: jobject, method: JMethodID, args: &[Arg<jobject>]) -> Result<jobject> {
        let mut env = self.env.borrow_mut();
        let recv = unsafe { JObject::from_raw(recv) };
        let args = to_jvalues(args);
        let value = unsafe {
            env.call_method_unchecked(&recv, method, ReturnType::Object, &args)
        }
        .map_err(|e| host_fault(&mut env, e))?;
        value.l().map_err(Error::from).map(|obj| obj.into_raw())
    }

    fn call_static_object(
        &self,
        class: jclass,
        method: JStaticMethodID,
        args: &[Arg<jobject>],
    ) -> Result<jobject> {
        let mut env = self.env.borrow_mut();
        let class: JClass = unsafe { JObject::from_raw(class) }.into();
        let args = to_jvalues(args);
        let value = unsafe {
            env.call_static_method_unchecked(class, method, ReturnType::Object, &args)
        }
        .map_err(|e| host_fault(&mut env, e))?;
        value.l().map_err(Error::from).map(|obj| obj.into_raw())
    }

    fn static_object_field(&self, class: jclass, field: JStaticFieldID) -> Result<jobject> {
        let mut env = self.env.borrow_mut();
        let class: JClass = unsafe { JObject::from_raw(class) }.into();
        let value = env
            .get_static_field_unchecked(
                class,
                field,
                JavaType::Object("java/lang/Object".to_string()),
            )
            .map_err(|e| host_fault(&mut env, e))?;
        value.l().map_err(Error::from).map(|obj| obj.into_raw())
    }

    fn new_object(&self, class: jclass, ctor: JMethodID, args: &[Arg<jobject>]) -> Result<jobject> {
        let mut env = self.env.borrow_mut();
        let class: JClass = unsafe { JObject::from_raw(class) }.into();
        let args = to_jvalues(args);
        let obj = unsafe { env.new_object_unchecked(class, ctor, &args) }
            .map_err(|e| host_fault(&mut env, e))?;
        Ok(obj.into_raw())
    }

    fn new_string(&self, value: &str) -> Result<jobject> {
        let mut env = self.env.borrow_mut();
        let string = env
            .new_string(value)
            .map_err(|e| host_fault(&mut env, e))?;
        Ok(string.into_raw())
    }

    fn new_int_array(&self, len: i32) -> Result<jobject> {
        let mut env = self.env.borrow_mut();
        let array = env
            .new_int_array(len)
            .map_err(|e| host_fault(&mut env, e))?;
        Ok(array.into_raw())
    }

    fn int_array_region(&self, array: jobject, buf: &mut [i32]) -> Result<()> {
        let mut env = self.env.borrow_mut();
        let array = unsafe { JIntArray::from_raw(array) };
        env.get_int_array_region(&array, 0, buf)
            .map_err(|e| host_fault(&mut env, e))
    }
}

/// Native entry point invoked by the host runtime.
///
/// Runs the demo render sequence against the activity it was handed and
/// returns the constant greeting, whatever the sequence's outcome.
#[no_mangle]
pub extern "system" fn Java_io_pdfbridge_demo_MainActivity_stringFromJNI<'local>(
    env: JNIEnv<'local>,
    activity: JObject<'local>,
) -> jstring {
    let raw = activity.as_raw();
    let host = JniHost::new(env);
    let greeting = crate::pipeline::run_demo(&host, raw);

    let mut env = host.into_env();
    match env.new_string(greeting) {
        Ok(text) => text.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}
